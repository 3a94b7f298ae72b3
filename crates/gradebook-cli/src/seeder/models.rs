//! Plans for the rows a seeding run inserts.

use gradebook_models::AssignmentState;

/// Grades handed out to seeded `GRADED` assignments, in rotation.
pub const SEED_GRADES: &[&str] = &["A", "B+", "C", "A-", "B"];

/// How many people of each role to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub students: usize,
    pub teachers: usize,
    pub principals: usize,
}

impl SeedConfig {
    pub fn new(students: usize, teachers: usize) -> Self {
        Self {
            students,
            teachers,
            principals: 1,
        }
    }
}

/// A user row plus the role row that points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub username: String,
    pub email: String,
}

impl UserSeed {
    pub fn new(role_prefix: &str, index: usize) -> Self {
        let username = format!("{}{}", role_prefix, index + 1);
        Self {
            email: format!("{}@gradebook.test", username),
            username,
        }
    }
}

/// One seeded assignment, addressed by position in the seeded
/// student and teacher lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSeed {
    pub student_idx: usize,
    pub teacher_idx: Option<usize>,
    pub content: String,
    pub state: AssignmentState,
    pub grade: Option<&'static str>,
}
