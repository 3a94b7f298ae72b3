use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{list_assignments, submit_assignment, upsert_assignment};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(list_assignments).post(upsert_assignment))
        .route("/assignments/submit", post(submit_assignment))
}
