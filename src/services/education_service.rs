use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::Education;

pub struct EducationService {
    pool: SqlitePool,
}

impl EducationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        institution: &str,
        degree: &str,
        start_year: Option<i64>,
        end_year: Option<i64>,
    ) -> Result<Education, DatabaseError> {
        let entry = sqlx::query_as(
            "INSERT INTO education (institution, degree, start_year, end_year) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(institution)
        .bind(degree)
        .bind(start_year)
        .bind(end_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: i64,
        institution: &str,
        degree: &str,
        start_year: Option<i64>,
        end_year: Option<i64>,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE education SET institution = ?, degree = ?, start_year = ?, end_year = ? \
             WHERE id = ?",
        )
        .bind(institution)
        .bind(degree)
        .bind(start_year)
        .bind(end_year)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("education entry {id} does not exist")));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM education WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("education entry {id} does not exist")));
        }
        Ok(())
    }
}
