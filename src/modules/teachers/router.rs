use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{grade_assignment, list_assignments};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(list_assignments))
        .route("/assignments/grade", post(grade_assignment))
}
