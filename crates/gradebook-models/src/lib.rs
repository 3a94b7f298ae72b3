//! # Gradebook Models
//!
//! Domain models and DTOs for the Gradebook API.
//!
//! # Modules
//!
//! - [`assignments`]: assignment records, states, repository filters and request DTOs
//! - [`teachers`]: teacher records
//! - [`responses`]: response envelopes shared by every endpoint
//!
//! # Example
//!
//! ```ignore
//! use gradebook_models::assignments::{AssignmentFilter, AssignmentState};
//!
//! let filter = AssignmentFilter::default().with_states(&[
//!     AssignmentState::Submitted,
//!     AssignmentState::Graded,
//! ]);
//! ```

pub mod assignments;
pub mod responses;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use assignments::{
    Assignment, AssignmentFilter, AssignmentState, GradeAssignmentDto, NewAssignment,
    SubmitAssignmentDto, UpsertAssignmentDto,
};
pub use responses::{DataResponse, ReadyResponse};
pub use teachers::Teacher;
