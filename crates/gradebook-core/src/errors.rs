use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

/// Error kind reported for failures that match no classification rule.
pub const INTERNAL_ERROR_KIND: &str = "Internal Server Error";
/// Message reported for failures that match no classification rule.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Field name -> list of violation descriptions.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors raised deliberately by the domain layer.
///
/// Each variant carries its own status code and a client-safe message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    MissingPrincipal(String),
    #[error("{0}")]
    MalformedPrincipal(String),
    #[error("{0}")]
    InvalidStateTransition(String),
    #[error("{0}")]
    InvalidGrade(String),
    #[error("No assignment with id {0} was found")]
    AssignmentNotFound(i64),
    #[error("Assignment {0} was modified by another request; reload it and try again")]
    StaleAssignment(i64),
    #[error("{0}")]
    AssignmentOwnership(String),
    #[error("{0}")]
    EmptyContent(String),
}

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Unauthorized(_)
            | DomainError::MissingPrincipal(_)
            | DomainError::MalformedPrincipal(_) => StatusCode::UNAUTHORIZED,
            DomainError::InvalidStateTransition(_)
            | DomainError::InvalidGrade(_)
            | DomainError::EmptyContent(_) => StatusCode::BAD_REQUEST,
            DomainError::AssignmentNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::StaleAssignment(_) => StatusCode::CONFLICT,
            DomainError::AssignmentOwnership(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Stable name reported to clients as the error kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            DomainError::Unauthorized(_) => "UnauthorizedError",
            DomainError::MissingPrincipal(_) => "MissingPrincipalError",
            DomainError::MalformedPrincipal(_) => "MalformedPrincipalError",
            DomainError::InvalidStateTransition(_) => "InvalidStateTransitionError",
            DomainError::InvalidGrade(_) => "InvalidGradeError",
            DomainError::AssignmentNotFound(_) => "AssignmentNotFoundError",
            DomainError::StaleAssignment(_) => "StaleAssignmentError",
            DomainError::AssignmentOwnership(_) => "AssignmentOwnershipError",
            DomainError::EmptyContent(_) => "EmptyContentError",
        }
    }
}

/// Every failure a request can end in.
///
/// Variant order matches the order in which [`classify`] applies its rules.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid input: {0:?}")]
    Validation(FieldErrors),

    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("{message}")]
    Http {
        status: StatusCode,
        kind: &'static str,
        message: String,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        AppError::Internal(err.into())
    }

    pub fn integrity(diagnostic: impl Into<String>) -> Self {
        AppError::Integrity(diagnostic.into())
    }

    pub fn http(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        AppError::Http {
            status,
            kind,
            message: message.into(),
        }
    }

    pub fn not_found_route(path: &str) -> Self {
        Self::http(
            StatusCode::NOT_FOUND,
            "NotFound",
            format!("No route matches {}", path),
        )
    }

    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::http(
            StatusCode::METHOD_NOT_ALLOWED,
            "MethodNotAllowed",
            format!("Method {} is not allowed for {}", method, path),
        )
    }

    /// Validation failure on a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        AppError::Validation(errors)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        DomainError::Unauthorized(message.into()).into()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| {
                        error
                            .message
                            .as_ref()
                            .map(|msg| msg.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field))
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        AppError::Validation(fields)
    }
}

/// The client-facing shape of any failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedError {
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(rename = "error")]
    pub error_kind: String,
    pub message: Value,
}

/// Maps any [`AppError`] onto its client-facing response.
///
/// Rules, first match wins:
/// 1. domain errors keep their own status, type name and message
/// 2. field validation failures become 400 `ValidationError`
/// 3. constraint violations become 400 `IntegrityError`
/// 4. transport errors keep their status and kind
/// 5. everything else becomes a generic 500
pub fn classify(err: &AppError) -> ClassifiedError {
    match err {
        AppError::Domain(domain) => ClassifiedError {
            status: domain.status_code(),
            error_kind: domain.type_name().to_string(),
            message: Value::String(domain.to_string()),
        },
        AppError::Validation(fields) => ClassifiedError {
            status: StatusCode::BAD_REQUEST,
            error_kind: "ValidationError".to_string(),
            message: json!(fields),
        },
        AppError::Integrity(diagnostic) => ClassifiedError {
            status: StatusCode::BAD_REQUEST,
            error_kind: "IntegrityError".to_string(),
            message: Value::String(diagnostic.clone()),
        },
        AppError::Http {
            status,
            kind,
            message,
        } => ClassifiedError {
            status: *status,
            error_kind: (*kind).to_string(),
            message: Value::String(message.clone()),
        },
        AppError::Internal(_) => ClassifiedError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error_kind: INTERNAL_ERROR_KIND.to_string(),
            message: Value::String(INTERNAL_ERROR_MESSAGE.to_string()),
        },
    }
}

fn log_error(err: &AppError, classified: &ClassifiedError) {
    if classified.status.is_server_error() {
        tracing::error!(
            status = classified.status.as_u16(),
            error = ?err,
            "Unhandled error: {}",
            err
        );
    } else {
        tracing::warn!(
            status = classified.status.as_u16(),
            kind = %classified.error_kind,
            "Request failed: {}",
            err
        );
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let classified = classify(&self);
        log_error(&self, &classified);

        (classified.status, Json(classified)).into_response()
    }
}
