use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Education, WorkExperience};

/// The singleton profile row (always id 1).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// Profile plus its full education and work history, as served by
/// `GET /api/profile`. The profile columns are flattened to the top level.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileAggregate {
    #[serde(flatten)]
    pub profile: Profile,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
}
