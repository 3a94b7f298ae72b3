#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use gradebook::router::init_router;
use gradebook::state::AppState;
use gradebook_config::{CorsConfig, GradingConfig};
use gradebook_core::AppError;
use gradebook_db::AssignmentRepository;
use gradebook_db::memory::MemoryStore;
use gradebook_models::{Assignment, AssignmentFilter, AssignmentState, NewAssignment};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const DRAFT_ID: i64 = 1;
pub const SUBMITTED_TO_T1_ID: i64 = 2;
pub const SUBMITTED_TO_T2_ID: i64 = 3;
pub const GRADED_ID: i64 = 4;

/// Store with students 1 and 2, teachers 1 and 2, and one assignment per
/// interesting state:
///
/// | id | student | teacher | state     |
/// |----|---------|---------|-----------|
/// | 1  | 1       | -       | DRAFT     |
/// | 2  | 1       | 1       | SUBMITTED |
/// | 3  | 2       | 2       | SUBMITTED |
/// | 4  | 2       | 1       | GRADED A  |
pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.add_student(1).await;
    store.add_student(2).await;
    store.add_teacher(1, 3).await;
    store.add_teacher(2, 4).await;

    for (id, student_id, teacher_id, state, grade) in [
        (DRAFT_ID, 1, None, AssignmentState::Draft, None),
        (SUBMITTED_TO_T1_ID, 1, Some(1), AssignmentState::Submitted, None),
        (SUBMITTED_TO_T2_ID, 2, Some(2), AssignmentState::Submitted, None),
        (GRADED_ID, 2, Some(1), AssignmentState::Graded, Some("A")),
    ] {
        let now = Utc::now();
        store
            .put_assignment(Assignment {
                id,
                content: format!("Essay {}", id),
                state,
                grade: grade.map(str::to_string),
                student_id,
                teacher_id,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
    }

    store
}

pub fn app_with(store: &MemoryStore, grading_config: GradingConfig) -> Router {
    let state = AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        grading_config,
        CorsConfig::default(),
    );
    init_router(state)
}

pub fn app(store: &MemoryStore) -> Router {
    app_with(store, GradingConfig::default())
}

pub fn principal_header(principal_id: i64) -> String {
    format!(r#"{{"user_id": 5, "principal_id": {}}}"#, principal_id)
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    principal: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(principal) = principal {
        builder = builder.header("x-principal", principal);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Repository whose every call fails with an unexpected error.
pub struct FailingRepository;

#[async_trait]
impl AssignmentRepository for FailingRepository {
    async fn get_by_id(&self, _id: i64) -> Result<Option<Assignment>, AppError> {
        Err(AppError::internal(anyhow::anyhow!(
            "connection reset by peer while reading from pool"
        )))
    }

    async fn query(&self, _filter: &AssignmentFilter) -> Result<Vec<Assignment>, AppError> {
        Err(AppError::internal(anyhow::anyhow!(
            "connection reset by peer while reading from pool"
        )))
    }

    async fn insert(&self, _new: NewAssignment) -> Result<Assignment, AppError> {
        Err(AppError::internal(anyhow::anyhow!("pool timed out")))
    }

    async fn commit(&self, _assignment: &Assignment) -> Result<Assignment, AppError> {
        Err(AppError::internal(anyhow::anyhow!("pool timed out")))
    }
}

pub fn failing_app() -> Router {
    let state = AppState::new(
        Arc::new(FailingRepository),
        Arc::new(MemoryStore::new()),
        GradingConfig::default(),
        CorsConfig::default(),
    );
    init_router(state)
}
