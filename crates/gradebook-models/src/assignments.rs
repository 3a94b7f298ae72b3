use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Lifecycle state of an assignment. Only ever advances
/// `DRAFT -> SUBMITTED -> GRADED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "assignment_state", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentState {
    Draft,
    Submitted,
    Graded,
}

impl AssignmentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentState::Draft => "DRAFT",
            AssignmentState::Submitted => "SUBMITTED",
            AssignmentState::Graded => "GRADED",
        }
    }
}

impl fmt::Display for AssignmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: i64,
    pub content: String,
    pub state: AssignmentState,
    /// Set only once the assignment is graded
    pub grade: Option<String>,
    pub student_id: i64,
    /// Set when the assignment is submitted
    pub teacher_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A draft about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub student_id: i64,
    pub content: String,
}

/// Predicate handed to the repository's `query`.
///
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub states: Option<Vec<AssignmentState>>,
}

impl AssignmentFilter {
    pub fn for_student(student_id: i64) -> Self {
        Self {
            student_id: Some(student_id),
            ..Self::default()
        }
    }

    pub fn for_teacher(teacher_id: i64) -> Self {
        Self {
            teacher_id: Some(teacher_id),
            ..Self::default()
        }
    }

    pub fn with_states(mut self, states: &[AssignmentState]) -> Self {
        self.states = Some(states.to_vec());
        self
    }

    pub fn matches(&self, assignment: &Assignment) -> bool {
        self.student_id.is_none_or(|id| assignment.student_id == id)
            && self
                .teacher_id
                .is_none_or(|id| assignment.teacher_id == Some(id))
            && self
                .states
                .as_ref()
                .is_none_or(|states| states.contains(&assignment.state))
    }
}

/// Creates a draft when `id` is absent, otherwise edits the draft with that id.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertAssignmentDto {
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 10000, message = "Content must be between 1 and 10000 characters"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitAssignmentDto {
    pub id: i64,
    #[validate(range(min = 1, message = "teacher_id must be a positive id"))]
    pub teacher_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GradeAssignmentDto {
    pub id: i64,
    #[validate(length(min = 1, message = "Grade must not be empty"))]
    pub grade: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn assignment(state: AssignmentState, teacher_id: Option<i64>) -> Assignment {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Assignment {
            id: 1,
            content: "Essay".to_string(),
            state,
            grade: None,
            student_id: 1,
            teacher_id,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = AssignmentFilter::default();
        assert!(filter.matches(&assignment(AssignmentState::Draft, None)));
        assert!(filter.matches(&assignment(AssignmentState::Graded, Some(2))));
    }

    #[test]
    fn test_filter_by_teacher_excludes_unsubmitted() {
        let filter = AssignmentFilter::for_teacher(2);
        assert!(filter.matches(&assignment(AssignmentState::Submitted, Some(2))));
        assert!(!filter.matches(&assignment(AssignmentState::Submitted, Some(3))));
        assert!(!filter.matches(&assignment(AssignmentState::Draft, None)));
    }

    #[test]
    fn test_filter_by_state() {
        let filter = AssignmentFilter::default()
            .with_states(&[AssignmentState::Submitted, AssignmentState::Graded]);
        assert!(!filter.matches(&assignment(AssignmentState::Draft, None)));
        assert!(filter.matches(&assignment(AssignmentState::Graded, Some(1))));
    }

    #[test]
    fn test_state_serializes_upper_case() {
        let json = serde_json::to_string(&AssignmentState::Submitted).unwrap();
        assert_eq!(json, r#""SUBMITTED""#);
    }

    #[test]
    fn test_grade_dto_rejects_empty_grade() {
        let dto = GradeAssignmentDto {
            id: 1,
            grade: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
