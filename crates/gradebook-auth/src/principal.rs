//! The request principal and its extraction from the `X-Principal` header.

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderMap;
use gradebook_core::DomainError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Header carrying the gateway-asserted identity (matched case-insensitively).
pub const PRINCIPAL_HEADER: &str = "x-principal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    Principal,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Principal => "principal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "principal" => Ok(Role::Principal),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

/// Identity and role asserted for the current request.
///
/// Built per request by [`extract`] and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Principal {
    /// Id of the student, teacher or principal record
    pub principal_id: String,
    pub role: Role,
    /// Backing user account, when the gateway supplies it
    pub user_id: Option<i64>,
}

impl Principal {
    /// The principal id as a record id, for ownership checks.
    pub fn numeric_id(&self) -> Result<i64, DomainError> {
        self.principal_id.parse::<i64>().map_err(|_| {
            DomainError::MalformedPrincipal(format!(
                "principal_id '{}' is not a valid record id",
                self.principal_id
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PrincipalId {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct PrincipalAssertion {
    principal_id: PrincipalId,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    user_id: Option<i64>,
}

/// Parses the principal header.
///
/// A role embedded in the header wins over `route_role`, so a mismatch is
/// left for the guard to reject.
pub fn extract(headers: &HeaderMap, route_role: Role) -> Result<Principal, DomainError> {
    let raw = headers
        .get(PRINCIPAL_HEADER)
        .ok_or_else(|| DomainError::MissingPrincipal("Missing X-Principal header".to_string()))?;

    let raw = raw.to_str().map_err(|_| {
        DomainError::MalformedPrincipal("X-Principal header is not valid text".to_string())
    })?;

    let assertion: PrincipalAssertion = serde_json::from_str(raw).map_err(|e| {
        DomainError::MalformedPrincipal(format!("Invalid X-Principal header: {}", e))
    })?;

    let principal_id = match assertion.principal_id {
        PrincipalId::Text(id) => id.trim().to_string(),
        PrincipalId::Number(id) => id.to_string(),
    };

    if principal_id.is_empty() {
        return Err(DomainError::MalformedPrincipal(
            "principal_id must not be empty".to_string(),
        ));
    }

    Ok(Principal {
        principal_id,
        role: assertion.role.unwrap_or(route_role),
        user_id: assertion.user_id,
    })
}
