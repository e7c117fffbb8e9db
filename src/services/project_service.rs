use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Project, ProjectSkillRow, ProjectWithSkills};

/// Project columns plus one skill name per association, one row per pair.
/// Ordered by project id so the rows for a project are contiguous and
/// `group_rows` can fold them in a single pass.
const PROJECT_SKILLS_SELECT: &str = "SELECT p.id, p.title, p.description, p.repo_link, \
     p.live_link, s.name AS skill_name \
     FROM projects p \
     LEFT JOIN project_skills ps ON ps.project_id = p.id \
     LEFT JOIN skills s ON s.id = ps.skill_id";

pub struct ProjectService {
    pool: SqlitePool,
}

impl ProjectService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All projects with their skill names. With a filter, only projects
    /// having at least one skill whose name contains the filter as a
    /// case-sensitive substring. `instr` rather than LIKE: SQLite's LIKE is
    /// case-insensitive for ASCII and treats `%`/`_` in the term as
    /// wildcards.
    pub async fn list(
        &self,
        skill_filter: Option<&str>,
    ) -> Result<Vec<ProjectWithSkills>, DatabaseError> {
        let rows: Vec<ProjectSkillRow> = match skill_filter {
            Some(term) => {
                let sql = format!(
                    "{PROJECT_SKILLS_SELECT} \
                     WHERE p.id IN (\
                         SELECT ps2.project_id FROM project_skills ps2 \
                         JOIN skills s2 ON s2.id = ps2.skill_id \
                         WHERE instr(s2.name, ?) > 0\
                     ) \
                     ORDER BY p.id"
                );
                sqlx::query_as(&sql).bind(term).fetch_all(&self.pool).await?
            }
            None => {
                let sql = format!("{PROJECT_SKILLS_SELECT} ORDER BY p.id");
                sqlx::query_as(&sql).fetch_all(&self.pool).await?
            }
        };

        Ok(group_rows(rows))
    }

    /// Projects whose title or description contains `term` as a
    /// case-sensitive substring. Emptiness of the term is a validation
    /// concern and is rejected before this is called.
    pub async fn search(&self, term: &str) -> Result<Vec<ProjectWithSkills>, DatabaseError> {
        let sql = format!(
            "{PROJECT_SKILLS_SELECT} \
             WHERE instr(p.title, ?1) > 0 OR instr(p.description, ?1) > 0 \
             ORDER BY p.id"
        );
        let rows: Vec<ProjectSkillRow> =
            sqlx::query_as(&sql).bind(term).fetch_all(&self.pool).await?;
        Ok(group_rows(rows))
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
        repo_link: Option<&str>,
        live_link: Option<&str>,
    ) -> Result<Project, DatabaseError> {
        let project = sqlx::query_as(
            "INSERT INTO projects (title, description, repo_link, live_link) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(title)
        .bind(description)
        .bind(repo_link)
        .bind(live_link)
        .fetch_one(&self.pool)
        .await?;
        Ok(project)
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        description: &str,
        repo_link: Option<&str>,
        live_link: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE projects SET title = ?, description = ?, repo_link = ?, live_link = ? \
             WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(repo_link)
        .bind(live_link)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("project {id} does not exist")));
        }
        Ok(())
    }

    /// Remove a project and its skill associations as one atomic unit.
    /// Associations go first (no cascade on the link table); if the project
    /// row turns out not to exist the transaction is rolled back.
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM project_skills WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("project {id} does not exist")));
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Fold join rows (ordered by project id) into one entry per project.
/// A project whose only row has a NULL skill name gets an empty list.
fn group_rows(rows: Vec<ProjectSkillRow>) -> Vec<ProjectWithSkills> {
    let mut projects: Vec<ProjectWithSkills> = Vec::new();

    for row in rows {
        let matches_last = projects.last().is_some_and(|p| p.project.id == row.id);
        if !matches_last {
            projects.push(ProjectWithSkills {
                project: Project {
                    id: row.id,
                    title: row.title,
                    description: row.description,
                    repo_link: row.repo_link,
                    live_link: row.live_link,
                },
                skills: Vec::new(),
            });
        }
        if let (Some(entry), Some(name)) = (projects.last_mut(), row.skill_name) {
            entry.skills.push(name);
        }
    }

    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, skill_name: Option<&str>) -> ProjectSkillRow {
        ProjectSkillRow {
            id,
            title: format!("project {id}"),
            description: "desc".to_string(),
            repo_link: None,
            live_link: None,
            skill_name: skill_name.map(str::to_string),
        }
    }

    #[test]
    fn groups_contiguous_rows_per_project() {
        let grouped = group_rows(vec![
            row(1, Some("Rust")),
            row(1, Some("SQL")),
            row(2, Some("Docker")),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].skills, vec!["Rust", "SQL"]);
        assert_eq!(grouped[1].skills, vec!["Docker"]);
    }

    #[test]
    fn project_without_skills_gets_empty_list() {
        let grouped = group_rows(vec![row(1, None), row(2, Some("Rust"))]);

        assert_eq!(grouped.len(), 2);
        assert!(grouped[0].skills.is_empty());
        assert_eq!(grouped[1].skills, vec!["Rust"]);
    }

    #[test]
    fn empty_input_yields_no_projects() {
        assert!(group_rows(Vec::new()).is_empty());
    }
}
