use sqlx::SqlitePool;

use crate::database::manager::{is_foreign_key_violation, is_unique_violation, DatabaseError};
use crate::database::models::{Skill, TopSkill};

pub struct SkillService {
    pool: SqlitePool,
}

impl SkillService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Skill>, DatabaseError> {
        let skills = sqlx::query_as("SELECT * FROM skills ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(skills)
    }

    /// The most-used skills, ranked by how many projects reference them.
    /// The inner join drops skills with no projects.
    pub async fn top(&self, limit: i64) -> Result<Vec<TopSkill>, DatabaseError> {
        let skills = sqlx::query_as(
            "SELECT s.id, s.name, s.category, COUNT(ps.project_id) AS project_count \
             FROM skills s \
             JOIN project_skills ps ON ps.skill_id = s.id \
             GROUP BY s.id \
             ORDER BY project_count DESC \
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }

    pub async fn create(&self, name: &str, category: Option<&str>) -> Result<Skill, DatabaseError> {
        sqlx::query_as("INSERT INTO skills (name, category) VALUES (?, ?) RETURNING *")
            .bind(name)
            .bind(category)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    DatabaseError::Conflict(format!("a skill named '{name}' already exists"))
                } else {
                    err.into()
                }
            })
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        category: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE skills SET name = ?, category = ? WHERE id = ?")
            .bind(name)
            .bind(category)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    DatabaseError::Conflict(format!("a skill named '{name}' already exists"))
                } else {
                    DatabaseError::from(err)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("skill {id} does not exist")));
        }
        Ok(())
    }

    /// Delete a skill. The RESTRICT constraint on the association table
    /// rejects the delete while any project still references the skill;
    /// that violation is reported as a conflict and the row is untouched.
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    DatabaseError::Conflict(format!(
                        "skill {id} is still linked to one or more projects"
                    ))
                } else {
                    DatabaseError::from(err)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("skill {id} does not exist")));
        }
        Ok(())
    }
}
