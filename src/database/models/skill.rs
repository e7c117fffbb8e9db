use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
}

/// A skill together with the number of projects that use it, as produced by
/// the top-skills aggregate. Skills with no projects never appear here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopSkill {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub project_count: i64,
}
