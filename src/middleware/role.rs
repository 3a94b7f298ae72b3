//! Role extractors for Axum handlers.
//!
//! Each extractor reads the `X-Principal` header, binds its route role and
//! rejects anything else with `UnauthorizedError` before the handler body
//! (or its JSON payload) is touched.

use gradebook_auth::Role;

/// Generates an extractor that only admits principals of `$role`.
macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub gradebook_auth::Principal);

        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = gradebook_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                let principal = gradebook_auth::authorize(&parts.headers, $role)?;

                tracing::debug!(
                    principal_id = %principal.principal_id,
                    role = %principal.role,
                    "Principal authorized"
                );

                Ok($name(principal))
            }
        }
    };
}

require_role!(RequireStudent, Role::Student);
require_role!(RequireTeacher, Role::Teacher);
require_role!(RequirePrincipal, Role::Principal);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;
    use gradebook_core::{AppError, DomainError};

    async fn run<E>(header: Option<&str>) -> Result<E, AppError>
    where
        E: FromRequestParts<(), Rejection = AppError>,
    {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header("X-Principal", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        E::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_student_extractor_admits_student() {
        let RequireStudent(principal) =
            run::<RequireStudent>(Some(r#"{"user_id": 1, "principal_id": 1}"#))
                .await
                .unwrap();
        assert_eq!(principal.role, Role::Student);
        assert_eq!(principal.principal_id, "1");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let err = run::<RequirePrincipal>(None).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_role_mismatch_is_unauthorized() {
        let err = run::<RequireTeacher>(Some(r#"{"principal_id": 1, "role": "principal"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Unauthorized(_))));
    }
}
