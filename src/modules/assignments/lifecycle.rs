//! Assignment state machine.
//!
//! ```text
//! DRAFT ──submit──▶ SUBMITTED ──grade──▶ GRADED
//!   │                  ▲  │                ▲ │
//!   │                  └──┘ resubmit       └─┘ regrade
//!   └──────────────grade───────────────────┘
//! ```
//!
//! Nothing leaves GRADED except a regrade, and nothing re-enters DRAFT.
//! Every operation validates before it mutates, so a failed call leaves the
//! record untouched.

use std::collections::HashSet;

use gradebook_config::GradingConfig;
use gradebook_core::DomainError;
use gradebook_models::{Assignment, AssignmentState};

/// States shown on the oversight listing when its filter is enabled.
pub const OVERSIGHT_VISIBLE_STATES: [AssignmentState; 2] =
    [AssignmentState::Submitted, AssignmentState::Graded];

/// The set of grade tokens the service accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradePolicy {
    allowed: HashSet<String>,
}

impl GradePolicy {
    pub fn new<I, S>(grades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: grades.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &GradingConfig) -> Self {
        Self::new(config.allowed_grades.iter().cloned())
    }

    /// Returns the trimmed token when it is recognized.
    pub fn validate(&self, raw: &str) -> Result<String, DomainError> {
        let token = raw.trim();

        if token.is_empty() {
            return Err(DomainError::InvalidGrade(
                "Grade must not be empty".to_string(),
            ));
        }

        if !self.allowed.contains(token) {
            return Err(DomainError::InvalidGrade(format!(
                "'{}' is not a recognized grade",
                token
            )));
        }

        Ok(token.to_string())
    }
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self::from_config(&GradingConfig::default())
    }
}

/// Replaces the content of a draft.
pub fn edit_draft(assignment: &mut Assignment, content: &str) -> Result<(), DomainError> {
    if assignment.state != AssignmentState::Draft {
        return Err(DomainError::InvalidStateTransition(format!(
            "Only a draft assignment can be edited; assignment {} is {}",
            assignment.id, assignment.state
        )));
    }

    assignment.content = ensure_content(content)?;
    Ok(())
}

pub fn ensure_content(content: &str) -> Result<String, DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::EmptyContent(
            "Assignment content must not be blank".to_string(),
        ));
    }

    Ok(content.to_string())
}

/// Moves a draft to SUBMITTED under `teacher_id`.
///
/// Resubmitting to the same teacher is a no-op.
pub fn submit(assignment: &mut Assignment, teacher_id: i64) -> Result<(), DomainError> {
    match assignment.state {
        AssignmentState::Graded => {
            return Err(DomainError::InvalidStateTransition(format!(
                "Assignment {} is already graded and cannot be submitted",
                assignment.id
            )));
        }
        AssignmentState::Submitted if assignment.teacher_id != Some(teacher_id) => {
            return Err(DomainError::InvalidStateTransition(format!(
                "Assignment {} is already submitted to another teacher",
                assignment.id
            )));
        }
        AssignmentState::Draft | AssignmentState::Submitted => {}
    }

    assignment.state = AssignmentState::Submitted;
    assignment.teacher_id = Some(teacher_id);
    Ok(())
}

/// Grades the assignment from any state, overwriting a previous grade.
pub fn grade(
    assignment: &mut Assignment,
    grade_value: &str,
    policy: &GradePolicy,
) -> Result<(), DomainError> {
    let grade = policy.validate(grade_value)?;

    assignment.grade = Some(grade);
    assignment.state = AssignmentState::Graded;
    Ok(())
}

pub fn is_visible_to_oversight(assignment: &Assignment) -> bool {
    OVERSIGHT_VISIBLE_STATES.contains(&assignment.state)
}
