//! # Gradebook Auth
//!
//! Principal extraction and role authorization for the Gradebook API.
//!
//! Identity is asserted by a trusted upstream gateway in the `X-Principal`
//! header as a JSON object. No signature or token verification happens here:
//!
//! ```text
//! X-Principal: {"user_id": 5, "principal_id": 1}
//! X-Principal: {"principal_id": "3", "role": "teacher"}
//! ```
//!
//! - [`principal`]: the [`Principal`] descriptor and [`extract`]
//! - [`guard`]: the [`require`] role check and [`authorize`], which composes both
//!
//! # Example
//!
//! ```ignore
//! use gradebook_auth::{Role, extract, require};
//!
//! let principal = extract(&headers, Role::Teacher)?;
//! let principal = require(Role::Teacher, principal)?;
//! ```

pub mod guard;
pub mod principal;

// Re-export commonly used types at crate root
pub use guard::{authorize, require};
pub use principal::{PRINCIPAL_HEADER, Principal, Role, extract};
