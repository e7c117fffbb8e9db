use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub repo_link: Option<String>,
    pub live_link: Option<String>,
}

/// One row of the project/skill LEFT JOIN: project columns plus at most one
/// associated skill name. `skill_name` is NULL for projects with no skills.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectSkillRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub repo_link: Option<String>,
    pub live_link: Option<String>,
    pub skill_name: Option<String>,
}

/// A project with its skill names collected into a list. A project without
/// associations serializes `"skills": []`, never null.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithSkills {
    #[serde(flatten)]
    pub project: Project,
    pub skills: Vec<String>,
}
