//! # Gradebook Core
//!
//! Core error types for the Gradebook API.
//!
//! Every failure raised by a handler, the assignment lifecycle, the principal
//! guard or the data layer is expressed as an [`AppError`]. The single
//! [`classify`] function turns any of them into a [`ClassifiedError`], which is
//! what clients see:
//!
//! ```text
//! { "error": "<error kind>", "message": <string or field map> }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use gradebook_core::{AppError, DomainError, classify};
//!
//! let err: AppError = DomainError::AssignmentNotFound(42).into();
//! let classified = classify(&err);
//! assert_eq!(classified.status.as_u16(), 404);
//! assert_eq!(classified.error_kind, "AssignmentNotFoundError");
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, ClassifiedError, DomainError, FieldErrors, classify};
