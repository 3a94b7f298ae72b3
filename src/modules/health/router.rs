use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::readiness;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/", get(readiness))
}
