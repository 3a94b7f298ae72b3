use async_trait::async_trait;
use gradebook_core::{AppError, DomainError};
use gradebook_models::{Assignment, AssignmentFilter, AssignmentState, NewAssignment};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use crate::map_sqlx_error;

const ASSIGNMENT_COLUMNS: &str =
    "id, content, state, grade, student_id, teacher_id, created_at, updated_at";

/// Transactional record store for assignments.
///
/// `commit` is the only write path for existing records and the only place
/// constraint violations surface.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Assignment>, AppError>;

    async fn query(&self, filter: &AssignmentFilter) -> Result<Vec<Assignment>, AppError>;

    async fn insert(&self, new: NewAssignment) -> Result<Assignment, AppError>;

    /// Persists the mutable fields of `assignment` and returns the stored row.
    ///
    /// The write only applies if the stored row still carries the
    /// `updated_at` that `assignment` was read with; otherwise the record
    /// changed underneath the caller and `StaleAssignment` is returned.
    async fn commit(&self, assignment: &Assignment) -> Result<Assignment, AppError>;
}

#[derive(Clone, Debug)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Assignment>, AppError> {
        let sql = format!("SELECT {} FROM assignments WHERE id = $1", ASSIGNMENT_COLUMNS);

        sqlx::query_as::<_, Assignment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    #[instrument(skip(self))]
    async fn query(&self, filter: &AssignmentFilter) -> Result<Vec<Assignment>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM assignments WHERE TRUE",
            ASSIGNMENT_COLUMNS
        ));

        if let Some(student_id) = filter.student_id {
            builder.push(" AND student_id = ").push_bind(student_id);
        }

        if let Some(teacher_id) = filter.teacher_id {
            builder.push(" AND teacher_id = ").push_bind(teacher_id);
        }

        if let Some(states) = &filter.states {
            if states.is_empty() {
                return Ok(Vec::new());
            }

            builder.push(" AND state IN (");
            let mut separated = builder.separated(", ");
            for state in states {
                separated.push_bind(*state);
            }
            separated.push_unseparated(")");
        }

        builder.push(" ORDER BY id");

        builder
            .build_query_as::<Assignment>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    #[instrument(skip(self))]
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, AppError> {
        let sql = format!(
            "INSERT INTO assignments (student_id, content, state) VALUES ($1, $2, $3) RETURNING {}",
            ASSIGNMENT_COLUMNS
        );

        sqlx::query_as::<_, Assignment>(&sql)
            .bind(new.student_id)
            .bind(&new.content)
            .bind(AssignmentState::Draft)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    #[instrument(skip(self), fields(assignment_id = assignment.id))]
    async fn commit(&self, assignment: &Assignment) -> Result<Assignment, AppError> {
        let sql = format!(
            r#"UPDATE assignments
               SET content = $1, state = $2, grade = $3, teacher_id = $4,
                   updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
               WHERE id = $5 AND updated_at = $6
               RETURNING {}"#,
            ASSIGNMENT_COLUMNS
        );

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let stored = sqlx::query_as::<_, Assignment>(&sql)
            .bind(&assignment.content)
            .bind(assignment.state)
            .bind(&assignment.grade)
            .bind(assignment.teacher_id)
            .bind(assignment.id)
            .bind(assignment.updated_at)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let Some(stored) = stored else {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM assignments WHERE id = $1)")
                    .bind(assignment.id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_sqlx_error)?;

            tracing::warn!(exists, "Commit matched no current row");

            return Err(if exists {
                DomainError::StaleAssignment(assignment.id)
            } else {
                DomainError::AssignmentNotFound(assignment.id)
            }
            .into());
        };

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(stored)
    }
}
