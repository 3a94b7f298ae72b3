//! Grading policy configuration.
//!
//! # Configuration
//!
//! - `ALLOWED_GRADES`: comma-separated grade tokens accepted when grading
//!   (default: `A+,A,A-,B+,B,B-,C+,C,C-,D+,D,D-,F`)
//! - `OVERSIGHT_FILTER_ENABLED`: when `true`, the principal assignment listing
//!   only shows submitted and graded work; when `false` it shows every
//!   assignment including drafts (default: `true`)
//!
//! # Example
//!
//! ```ignore
//! use gradebook_config::GradingConfig;
//!
//! let config = GradingConfig::from_env();
//! assert!(config.allowed_grades.contains(&"B+".to_string()));
//! ```

use std::env;

pub const DEFAULT_ALLOWED_GRADES: &[&str] = &[
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradingConfig {
    /// Grade tokens accepted by the lifecycle, matched exactly.
    pub allowed_grades: Vec<String>,

    /// Restricts the oversight listing to submitted and graded assignments.
    pub oversight_filter_enabled: bool,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            allowed_grades: DEFAULT_ALLOWED_GRADES
                .iter()
                .map(|g| g.to_string())
                .collect(),
            oversight_filter_enabled: true,
        }
    }
}

impl GradingConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_grades = env::var("ALLOWED_GRADES")
            .ok()
            .map(|raw| parse_grades(&raw))
            .filter(|grades| !grades.is_empty())
            .unwrap_or(defaults.allowed_grades);

        let oversight_filter_enabled = match env::var("OVERSIGHT_FILTER_ENABLED") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    "Invalid OVERSIGHT_FILTER_ENABLED, falling back to default"
                );
                defaults.oversight_filter_enabled
            }),
            Err(_) => defaults.oversight_filter_enabled,
        };

        Self {
            allowed_grades,
            oversight_filter_enabled,
        }
    }
}

fn parse_grades(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GradingConfig::default();
        assert_eq!(config.allowed_grades.len(), 13);
        assert!(config.allowed_grades.contains(&"B+".to_string()));
        assert!(config.oversight_filter_enabled);
    }

    #[test]
    fn test_parse_grades() {
        assert_eq!(
            parse_grades(" A, B ,,C"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert!(parse_grades(" , ").is_empty());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
