//! # Gradebook API
//!
//! A REST service where students draft and submit assignments, teachers grade
//! the work submitted to them, and principals oversee and regrade everything.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── gradebook-core/    # AppError and the error classifier
//! ├── gradebook-auth/    # X-Principal extraction and role checks
//! ├── gradebook-config/  # Server, CORS and grading settings
//! ├── gradebook-models/  # Assignment, Teacher and request DTOs
//! ├── gradebook-db/      # Repository traits, Postgres and in-memory stores
//! └── gradebook-cli/     # migrate / seed commands
//! src/
//! ├── middleware/        # Role extractors
//! └── modules/
//!     ├── assignments/   # Lifecycle rules and service
//!     ├── students/
//!     ├── teachers/
//!     ├── principals/
//!     └── health/
//! ```
//!
//! ## Identity
//!
//! There is no login. Every role-scoped request carries an `X-Principal`
//! header with a JSON assertion such as `{"user_id": 5, "principal_id": 1}`,
//! and the route prefix (`/student`, `/teacher`, `/principal`) decides which
//! role the caller must hold.
//!
//! ## Errors
//!
//! All failures leave the service as `{"error": <kind>, "message": <detail>}`.
//! See [`gradebook_core::classify`] for the rules.
//!
//! ## API Documentation
//!
//! - Scalar: `http://localhost:3000/scalar`
//! - OpenAPI document: `http://localhost:3000/api-docs/openapi.json`

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use gradebook_auth;
pub use gradebook_config;
pub use gradebook_core;
pub use gradebook_db;
pub use gradebook_models;
