use sqlx::SqlitePool;
use tracing::info;

use crate::database::manager::DatabaseError;

/// Populate an empty store with the fixed starter dataset.
///
/// Runs once at startup, after the schema is in place. The profile row is
/// the idempotency marker: if one exists the whole seed is skipped. The
/// inserts run inside a single transaction so a crash mid-seed cannot leave
/// a half-populated store behind.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let (profiles,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profile")
        .fetch_one(pool)
        .await?;

    if profiles > 0 {
        info!("store already seeded, skipping");
        return Ok(());
    }

    info!("store is empty, inserting seed data");
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO profile (id, name, email, github_url, linkedin_url, portfolio_url) \
         VALUES (1, ?, ?, ?, ?, ?)",
    )
    .bind("Alex Doe")
    .bind("alex.doe@example.com")
    .bind("https://github.com/alexdoe")
    .bind("https://www.linkedin.com/in/alexdoe")
    .bind("https://alexdoe.dev")
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO education (institution, degree, start_year, end_year) VALUES (?, ?, ?, ?)",
    )
    .bind("State University")
    .bind("B.Sc. in Computer Science")
    .bind(2017_i64)
    .bind(2021_i64)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "INSERT INTO work_experience (company, position, start_date, end_date, description) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind("Initech")
    .bind("Backend Engineer")
    .bind("2021-07-01")
    .bind(Option::<String>::None)
    .bind("Building and operating data services.")
    .execute(&mut *tx)
    .await?;

    let skills = [
        "Python",
        "JavaScript",
        "Node.js",
        "SQL",
        "React",
        "Docker",
        "Natural Language Processing",
    ];
    let mut skill_ids = std::collections::HashMap::new();
    for name in skills {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO skills (name, category) VALUES (?, ?) RETURNING id")
                .bind(name)
                .bind("Technology")
                .fetch_one(&mut *tx)
                .await?;
        skill_ids.insert(name, id);
    }

    let projects: [(&str, &str, &str, &[&str]); 2] = [
        (
            "Code Generation Service",
            "An API that turns natural language prompts into code snippets in several languages.",
            "https://github.com/alexdoe/codegen",
            &["Python", "Natural Language Processing"],
        ),
        (
            "Portfolio API",
            "A RESTful service to manage and display professional profile data.",
            "https://github.com/alexdoe/portfolio-api",
            &["JavaScript", "Node.js", "SQL", "Docker"],
        ),
    ];

    for (title, description, repo_link, project_skills) in projects {
        let (project_id,): (i64,) = sqlx::query_as(
            "INSERT INTO projects (title, description, repo_link) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(title)
        .bind(description)
        .bind(repo_link)
        .fetch_one(&mut *tx)
        .await?;

        for name in project_skills {
            if let Some(skill_id) = skill_ids.get(name) {
                sqlx::query("INSERT INTO project_skills (project_id, skill_id) VALUES (?, ?)")
                    .bind(project_id)
                    .bind(skill_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }
    }

    tx.commit().await?;
    info!("seeding complete");
    Ok(())
}
