//! Assignment lifecycle rules and the service that applies them against a
//! repository. Shared by the student, teacher and principal modules.

pub mod lifecycle;
pub mod service;

pub use lifecycle::{GradePolicy, is_visible_to_oversight};
pub use service::AssignmentService;
