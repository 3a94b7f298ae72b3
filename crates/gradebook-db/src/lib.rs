//! # Gradebook DB
//!
//! Database pool, migrations and record repositories for the Gradebook API.
//!
//! The service only talks to storage through two traits:
//!
//! - [`AssignmentRepository`]: `get_by_id`, `query`, `insert`, `commit`
//! - [`TeacherRepository`]: `list`
//!
//! [`PgAssignmentRepository`] and [`PgTeacherRepository`] implement them over a
//! PostgreSQL pool. With the `test-utils` feature, [`memory::MemoryStore`]
//! implements both in process.
//!
//! # Example
//!
//! ```ignore
//! use gradebook_db::{init_db_pool, run_migrations, PgAssignmentRepository};
//!
//! let pool = init_db_pool().await?;
//! run_migrations(&pool).await?;
//! let assignments = PgAssignmentRepository::new(pool.clone());
//! ```

use std::env;

use anyhow::Context;
use gradebook_core::AppError;
use sqlx::migrate::Migrator;

pub mod assignments;
pub mod teachers;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use assignments::{AssignmentRepository, PgAssignmentRepository};
pub use teachers::{PgTeacherRepository, TeacherRepository};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects to the database named by `DATABASE_URL`.
pub async fn init_db_pool() -> anyhow::Result<PgPool> {
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}

/// Converts a sqlx failure into an [`AppError`].
///
/// Constraint violations keep the engine's diagnostic text so the classifier
/// can report them as integrity errors; everything else is unclassified.
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    use sqlx::error::ErrorKind;

    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return AppError::integrity(db_err.message());
            }
            _ => {}
        }
    }

    AppError::internal(err)
}
