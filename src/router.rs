use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::health::init_health_router;
use crate::modules::principals::init_principals_router;
use crate::modules::students::init_students_router;
use crate::modules::teachers::init_teachers_router;
use crate::state::AppState;
use axum::http::{HeaderName, HeaderValue, Method, Uri};
use axum::{Json, Router, middleware};
use gradebook_auth::PRINCIPAL_HEADER;
use gradebook_core::AppError;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            axum::routing::get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(init_health_router())
        .nest("/student", init_students_router())
        .nest("/teacher", init_teachers_router())
        .nest("/principal", init_principals_router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    HeaderName::from_static(PRINCIPAL_HEADER),
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found_route(uri.path())
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(method.as_str(), uri.path())
}
