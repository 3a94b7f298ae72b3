use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{grade_assignment, list_assignments, list_teachers};

pub fn init_principals_router() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(list_assignments))
        .route("/assignments/grade", post(grade_assignment))
        .route("/teachers", get(list_teachers))
}
