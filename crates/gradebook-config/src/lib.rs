//! # Gradebook Config
//!
//! Configuration types for the Gradebook API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`grading`]: allowed grade tokens and oversight listing behaviour
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::{CorsConfig, GradingConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let cors_config = CorsConfig::from_env();
//! let grading_config = GradingConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod grading;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use grading::GradingConfig;
pub use server::ServerConfig;
