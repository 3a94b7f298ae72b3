//! Request guards.
//!
//! Every protected handler names the role it serves by taking one of the
//! extractors from [`role`] as an argument:
//!
//! 1. The client (or the gateway in front of it) sends `X-Principal: {"principal_id": ...}`
//! 2. The extractor parses the header and binds the route's role
//! 3. A principal of another role, or a missing/malformed header, is rejected with 401
//! 4. The handler runs with the authorized [`gradebook_auth::Principal`]
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::RequireTeacher;
//!
//! async fn list_assignments(RequireTeacher(principal): RequireTeacher) -> impl IntoResponse {
//!     let teacher_id = principal.numeric_id()?;
//!     // ...
//! }
//! ```

pub mod role;
