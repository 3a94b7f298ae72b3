//! In-process store implementing both repositories.
//!
//! Mirrors the constraints of the PostgreSQL schema (student and teacher
//! foreign keys, grade only when graded) and reports violations with the same
//! kind of diagnostic text, so handlers behave as they do against Postgres.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use gradebook_core::{AppError, DomainError};
use gradebook_models::{Assignment, AssignmentFilter, AssignmentState, NewAssignment, Teacher};
use tokio::sync::RwLock;

use crate::assignments::AssignmentRepository;
use crate::teachers::TeacherRepository;

#[derive(Debug, Default)]
struct Tables {
    assignments: BTreeMap<i64, Assignment>,
    teachers: BTreeMap<i64, Teacher>,
    students: BTreeSet<i64>,
    next_assignment_id: i64,
}

impl Tables {
    fn check_constraints(&self, assignment: &Assignment) -> Result<(), AppError> {
        if !self.students.contains(&assignment.student_id) {
            return Err(AppError::integrity(format!(
                "insert or update on table \"assignments\" violates foreign key constraint \"assignments_student_id_fkey\": Key (student_id)=({}) is not present in table \"students\".",
                assignment.student_id
            )));
        }

        if let Some(teacher_id) = assignment.teacher_id
            && !self.teachers.contains_key(&teacher_id)
        {
            return Err(AppError::integrity(format!(
                "insert or update on table \"assignments\" violates foreign key constraint \"assignments_teacher_id_fkey\": Key (teacher_id)=({}) is not present in table \"teachers\".",
                teacher_id
            )));
        }

        let graded = assignment.state == AssignmentState::Graded;
        if graded != assignment.grade.is_some() {
            return Err(AppError::integrity(
                "new row for relation \"assignments\" violates check constraint \"assignments_grade_only_when_graded\"",
            ));
        }

        Ok(())
    }
}

/// Cloning shares the underlying tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_student(&self, id: i64) {
        self.tables.write().await.students.insert(id);
    }

    pub async fn add_teacher(&self, id: i64, user_id: i64) -> Teacher {
        let now = Utc::now();
        let teacher = Teacher {
            id,
            user_id,
            created_at: now,
            updated_at: now,
        };
        self.tables
            .write()
            .await
            .teachers
            .insert(id, teacher.clone());
        teacher
    }

    /// Stores a fully-formed record as is, bypassing the lifecycle.
    pub async fn put_assignment(&self, assignment: Assignment) -> Result<Assignment, AppError> {
        let mut tables = self.tables.write().await;
        tables.check_constraints(&assignment)?;
        tables.next_assignment_id = tables.next_assignment_id.max(assignment.id);
        tables
            .assignments
            .insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    pub async fn assignment(&self, id: i64) -> Option<Assignment> {
        self.tables.read().await.assignments.get(&id).cloned()
    }
}

#[async_trait]
impl AssignmentRepository for MemoryStore {
    async fn get_by_id(&self, id: i64) -> Result<Option<Assignment>, AppError> {
        Ok(self.tables.read().await.assignments.get(&id).cloned())
    }

    async fn query(&self, filter: &AssignmentFilter) -> Result<Vec<Assignment>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .assignments
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn insert(&self, new: NewAssignment) -> Result<Assignment, AppError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let assignment = Assignment {
            id: tables.next_assignment_id + 1,
            content: new.content,
            state: AssignmentState::Draft,
            grade: None,
            student_id: new.student_id,
            teacher_id: None,
            created_at: now,
            updated_at: now,
        };

        tables.check_constraints(&assignment)?;
        tables.next_assignment_id = assignment.id;
        tables
            .assignments
            .insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn commit(&self, assignment: &Assignment) -> Result<Assignment, AppError> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.assignments.get(&assignment.id) else {
            return Err(DomainError::AssignmentNotFound(assignment.id).into());
        };

        if current.updated_at != assignment.updated_at {
            return Err(DomainError::StaleAssignment(assignment.id).into());
        }
        let previous = current.updated_at;

        tables.check_constraints(assignment)?;

        let mut stored = assignment.clone();
        stored.updated_at = Utc::now().max(previous + TimeDelta::microseconds(1));
        tables.assignments.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl TeacherRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(self.tables.read().await.teachers.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::classify;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        store.add_student(1).await;

        let first = store
            .insert(NewAssignment {
                student_id: 1,
                content: "First".to_string(),
            })
            .await
            .unwrap();
        let second = store
            .insert(NewAssignment {
                student_id: 1,
                content: "Second".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first.state, AssignmentState::Draft);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_commit_rejects_unknown_teacher() {
        let store = MemoryStore::new();
        store.add_student(1).await;
        let mut assignment = store
            .insert(NewAssignment {
                student_id: 1,
                content: "Essay".to_string(),
            })
            .await
            .unwrap();

        assignment.state = AssignmentState::Submitted;
        assignment.teacher_id = Some(99);

        let err = store.commit(&assignment).await.unwrap_err();
        assert_eq!(classify(&err).error_kind, "IntegrityError");

        let stored = store.assignment(assignment.id).await.unwrap();
        assert_eq!(stored.state, AssignmentState::Draft);
    }

    #[tokio::test]
    async fn test_commit_missing_record() {
        let store = MemoryStore::new();
        store.add_student(1).await;
        let mut assignment = store
            .insert(NewAssignment {
                student_id: 1,
                content: "Essay".to_string(),
            })
            .await
            .unwrap();
        assignment.id = 404;

        let err = store.commit(&assignment).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::AssignmentNotFound(404))
        ));
    }

    #[tokio::test]
    async fn test_query_applies_filter() {
        let store = MemoryStore::new();
        store.add_student(1).await;
        store.add_student(2).await;
        for student_id in [1, 2, 1] {
            store
                .insert(NewAssignment {
                    student_id,
                    content: "Essay".to_string(),
                })
                .await
                .unwrap();
        }

        let own = store
            .query(&AssignmentFilter::for_student(1))
            .await
            .unwrap();
        assert_eq!(own.len(), 2);
    }

    #[tokio::test]
    async fn test_commit_rejects_stale_copy() {
        let store = MemoryStore::new();
        store.add_student(1).await;
        store.add_teacher(1, 10).await;
        let inserted = store
            .insert(NewAssignment {
                student_id: 1,
                content: "Essay".to_string(),
            })
            .await
            .unwrap();

        let mut stale = store.get_by_id(inserted.id).await.unwrap().unwrap();
        let mut fresh = store.get_by_id(inserted.id).await.unwrap().unwrap();

        fresh.state = AssignmentState::Graded;
        fresh.grade = Some("A".to_string());
        store.commit(&fresh).await.unwrap();

        stale.content = "Late edit".to_string();
        let err = store.commit(&stale).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::StaleAssignment(id)) if id == inserted.id
        ));
        assert_eq!(classify(&err).status.as_u16(), 409);

        let stored = store.assignment(inserted.id).await.unwrap();
        assert_eq!(stored.state, AssignmentState::Graded);
        assert_eq!(stored.grade.as_deref(), Some("A"));
        assert_eq!(stored.content, "Essay");
    }

    #[tokio::test]
    async fn test_commit_returns_copy_usable_for_next_commit() {
        let store = MemoryStore::new();
        store.add_student(1).await;
        let mut assignment = store
            .insert(NewAssignment {
                student_id: 1,
                content: "Essay".to_string(),
            })
            .await
            .unwrap();

        assignment.content = "First edit".to_string();
        let mut assignment = store.commit(&assignment).await.unwrap();
        assignment.content = "Second edit".to_string();
        let stored = store.commit(&assignment).await.unwrap();

        assert_eq!(stored.content, "Second edit");
    }
}
