use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Education, Profile, ProfileAggregate, WorkExperience};

pub struct ProfileService {
    pool: SqlitePool,
}

impl ProfileService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The profile row plus full education and work history.
    ///
    /// A deployed instance always has exactly one seeded profile, so a
    /// missing row is a misconfiguration and surfaces as an internal error,
    /// not a 404.
    pub async fn aggregate(&self) -> Result<ProfileAggregate, DatabaseError> {
        let profile: Profile = sqlx::query_as("SELECT * FROM profile LIMIT 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DatabaseError::MissingProfile)?;

        let education: Vec<Education> =
            sqlx::query_as("SELECT * FROM education ORDER BY end_year DESC")
                .fetch_all(&self.pool)
                .await?;

        let work_experience: Vec<WorkExperience> =
            sqlx::query_as("SELECT * FROM work_experience ORDER BY start_date DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(ProfileAggregate { profile, education, work_experience })
    }

    /// In-place update of the singleton row.
    pub async fn update(
        &self,
        name: &str,
        email: &str,
        github_url: Option<&str>,
        linkedin_url: Option<&str>,
        portfolio_url: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE profile SET name = ?, email = ?, github_url = ?, linkedin_url = ?, \
             portfolio_url = ? WHERE id = 1",
        )
        .bind(name)
        .bind(email)
        .bind(github_url)
        .bind(linkedin_url)
        .bind(portfolio_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::MissingProfile);
        }
        Ok(())
    }
}
