pub mod education;
pub mod health;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod work;

use std::collections::HashMap;

use crate::error::ApiError;

/// Accumulates required-field checks for a request payload. A field that is
/// absent, or present but blank, counts as missing.
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self { missing: Vec::new() }
    }

    /// Returns the field value, recording the field name when it is missing.
    pub fn text<'a>(&mut self, value: &'a Option<String>, name: &'static str) -> &'a str {
        match value.as_deref() {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(name);
                ""
            }
        }
    }

    /// Succeeds when every requested field was present; otherwise a 400
    /// naming each missing field.
    pub fn check(self) -> Result<(), ApiError> {
        if self.missing.is_empty() {
            return Ok(());
        }

        let field_errors: HashMap<String, String> = self
            .missing
            .iter()
            .map(|name| (name.to_string(), "this field is required".to_string()))
            .collect();

        Err(ApiError::validation_error(
            format!("missing required fields: {}", self.missing.join(", ")),
            Some(field_errors),
        ))
    }
}
