//! # Gradebook CLI
//!
//! Database seeding utilities for Gradebook development.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use gradebook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(4, 2); // 4 students, 2 teachers
//! seed_all(&pool, &config).await?;
//! ```

pub mod seeder;
