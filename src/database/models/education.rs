use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    pub id: i64,
    pub institution: String,
    pub degree: String,
    pub start_year: Option<i64>,
    /// NULL while the degree is in progress.
    pub end_year: Option<i64>,
}
