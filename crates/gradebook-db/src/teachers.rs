use async_trait::async_trait;
use gradebook_core::AppError;
use gradebook_models::Teacher;
use sqlx::PgPool;
use tracing::instrument;

use crate::map_sqlx_error;

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Teacher>, AppError>;
}

#[derive(Clone, Debug)]
pub struct PgTeacherRepository {
    pool: PgPool,
}

impl PgTeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PgTeacherRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, user_id, created_at, updated_at FROM teachers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}
