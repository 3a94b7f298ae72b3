//! Role authorization applied once at handler entry.

use axum::http::HeaderMap;
use gradebook_core::DomainError;

use crate::principal::{Principal, Role, extract};

/// Returns the principal unchanged when it holds `role`.
pub fn require(role: Role, principal: Principal) -> Result<Principal, DomainError> {
    if principal.role != role {
        return Err(DomainError::Unauthorized(format!(
            "Access denied. Required role: {}, but principal has role: {}",
            role, principal.role
        )));
    }

    Ok(principal)
}

/// Extracts the principal for a route bound to `role` and checks it.
///
/// Missing or malformed headers are reported as `Unauthorized`, keeping the
/// extraction reason as the message.
pub fn authorize(headers: &HeaderMap, role: Role) -> Result<Principal, DomainError> {
    let principal = extract(headers, role).map_err(|err| match err {
        DomainError::MissingPrincipal(reason) | DomainError::MalformedPrincipal(reason) => {
            DomainError::Unauthorized(reason)
        }
        other => other,
    })?;

    require(role, principal)
}
