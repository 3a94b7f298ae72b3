use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use gradebook_core::AppError;

pub const MISSING_FIELD_MESSAGE: &str = "Missing data for required field.";
pub const INVALID_VALUE_MESSAGE: &str = "Not a valid value.";

const DESERIALIZE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

fn missing_field(detail: &str) -> Option<&str> {
    detail
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
}

/// `"grade: invalid type: ..."` -> `"grade"`
fn invalid_field(detail: &str) -> Option<&str> {
    let (path, reason) = detail.split_once(": ")?;
    (!path.contains(' ') && reason.starts_with("invalid")).then_some(path)
}

/// Maps a JSON body rejection onto the error taxonomy.
///
/// Shape problems are field-level validation failures; a wrong content type
/// keeps its transport status.
fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::http(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UnsupportedMediaType",
            "Expected request with `Content-Type: application/json`",
        ),
        JsonRejection::JsonDataError(err) => {
            let text = err.body_text();
            let detail = text.strip_prefix(DESERIALIZE_PREFIX).unwrap_or(&text);

            // serde stops at the first absent field (in declaration order), so a
            // body missing several fields reports only that one.
            if let Some(field) = missing_field(detail) {
                return AppError::invalid_field(field, MISSING_FIELD_MESSAGE);
            }

            if let Some(field) = invalid_field(detail) {
                return AppError::invalid_field(field, INVALID_VALUE_MESSAGE);
            }

            AppError::invalid_field("_schema", "Invalid input type.")
        }
        JsonRejection::JsonSyntaxError(_) => {
            AppError::invalid_field("_schema", "Request body is not valid JSON.")
        }
        other => AppError::http(other.status(), "BadRequest", other.body_text()),
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        assert_eq!(
            missing_field("missing field `grade` at line 1 column 9"),
            Some("grade")
        );
        assert_eq!(missing_field("expected value"), None);
    }

    #[test]
    fn test_invalid_field() {
        assert_eq!(
            invalid_field("id: invalid type: string \"one\", expected i64 at line 1 column 12"),
            Some("id")
        );
        assert_eq!(invalid_field("trailing characters at line 1 column 3"), None);
    }
}
