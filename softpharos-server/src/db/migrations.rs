//! Schema setup, run once at startup
//!
//! Every statement is `IF NOT EXISTS`, so running against an existing
//! database is a no-op.

use sqlx::PgPool;

const SCHEMA: &[(&str, &str)] = &[
    (
        "roles",
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            id SERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL UNIQUE,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100),
            email VARCHAR(255) NOT NULL UNIQUE,
            password TEXT NOT NULL,
            role_id INTEGER NOT NULL REFERENCES roles(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "projects",
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id SERIAL PRIMARY KEY,
            name VARCHAR(150),
            objective TEXT,
            created_by INTEGER NOT NULL REFERENCES users(id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "milestones",
        r#"
        CREATE TABLE IF NOT EXISTS milestones (
            id SERIAL PRIMARY KEY,
            project_id INTEGER NOT NULL REFERENCES projects(id),
            title VARCHAR(150),
            description TEXT,
            class_week INTEGER,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "comments",
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            id SERIAL PRIMARY KEY,
            milestone_id INTEGER NOT NULL REFERENCES milestones(id),
            user_id INTEGER NOT NULL REFERENCES users(id),
            content TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "deliverables",
        r#"
        CREATE TABLE IF NOT EXISTS deliverables (
            id SERIAL PRIMARY KEY,
            milestone_id INTEGER NOT NULL REFERENCES milestones(id),
            url TEXT NOT NULL,
            type VARCHAR(50),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "feedback",
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id SERIAL PRIMARY KEY,
            milestone_id INTEGER NOT NULL REFERENCES milestones(id),
            professor_id INTEGER NOT NULL REFERENCES users(id),
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "reactions",
        r#"
        CREATE TABLE IF NOT EXISTS reactions (
            id SERIAL PRIMARY KEY,
            milestone_id INTEGER NOT NULL REFERENCES milestones(id),
            user_id INTEGER NOT NULL REFERENCES users(id),
            type VARCHAR(50),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "project_members",
        r#"
        CREATE TABLE IF NOT EXISTS project_members (
            id SERIAL PRIMARY KEY,
            project_id INTEGER NOT NULL REFERENCES projects(id),
            user_id INTEGER NOT NULL REFERENCES users(id),
            role VARCHAR(50),
            joined_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_projects_created_by ON projects(created_by)",
    "CREATE INDEX IF NOT EXISTS idx_milestones_project ON milestones(project_id)",
    "CREATE INDEX IF NOT EXISTS idx_comments_milestone ON comments(milestone_id)",
    "CREATE INDEX IF NOT EXISTS idx_deliverables_milestone ON deliverables(milestone_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_milestone ON feedback(milestone_id)",
    "CREATE INDEX IF NOT EXISTS idx_reactions_milestone ON reactions(milestone_id)",
    "CREATE INDEX IF NOT EXISTS idx_project_members_project ON project_members(project_id)",
];

/// Create all tables and lookup indexes, parents before children.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    for (table, ddl) in SCHEMA {
        tracing::debug!(table, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!(tables = SCHEMA.len(), "Schema migrations complete");
    Ok(())
}
