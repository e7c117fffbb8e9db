use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::WorkExperience;

pub struct WorkService {
    pool: SqlitePool,
}

impl WorkService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company: &str,
        position: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        description: Option<&str>,
    ) -> Result<WorkExperience, DatabaseError> {
        let entry = sqlx::query_as(
            "INSERT INTO work_experience (company, position, start_date, end_date, description) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(company)
        .bind(position)
        .bind(start_date)
        .bind(end_date)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: i64,
        company: &str,
        position: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE work_experience SET company = ?, position = ?, start_date = ?, \
             end_date = ?, description = ? WHERE id = ?",
        )
        .bind(company)
        .bind(position)
        .bind(start_date)
        .bind(end_date)
        .bind(description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("work entry {id} does not exist")));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM work_experience WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("work entry {id} does not exist")));
        }
        Ok(())
    }
}
