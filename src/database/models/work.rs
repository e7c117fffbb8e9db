use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkExperience {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub start_date: Option<String>,
    /// NULL means the position is current.
    pub end_date: Option<String>,
    pub description: Option<String>,
}
