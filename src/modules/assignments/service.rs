use gradebook_core::{AppError, DomainError};
use gradebook_db::AssignmentRepository;
use gradebook_models::{
    Assignment, AssignmentFilter, GradeAssignmentDto, NewAssignment, SubmitAssignmentDto,
    UpsertAssignmentDto,
};
use tracing::instrument;

use super::lifecycle::{self, GradePolicy, OVERSIGHT_VISIBLE_STATES};

pub struct AssignmentService;

impl AssignmentService {
    async fn fetch(repo: &dyn AssignmentRepository, id: i64) -> Result<Assignment, AppError> {
        repo.get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::AssignmentNotFound(id).into())
    }

    fn ensure_student_owns(assignment: &Assignment, student_id: i64) -> Result<(), DomainError> {
        if assignment.student_id != student_id {
            return Err(DomainError::AssignmentOwnership(
                "This assignment belongs to another student".to_string(),
            ));
        }
        Ok(())
    }

    #[instrument(skip(repo))]
    pub async fn list_for_student(
        repo: &dyn AssignmentRepository,
        student_id: i64,
    ) -> Result<Vec<Assignment>, AppError> {
        repo.query(&AssignmentFilter::for_student(student_id)).await
    }

    /// Creates a draft, or edits an existing one when `dto.id` is set.
    #[instrument(skip(repo))]
    pub async fn upsert_draft(
        repo: &dyn AssignmentRepository,
        student_id: i64,
        dto: UpsertAssignmentDto,
    ) -> Result<Assignment, AppError> {
        let Some(id) = dto.id else {
            let content = lifecycle::ensure_content(&dto.content)?;
            return repo
                .insert(NewAssignment {
                    student_id,
                    content,
                })
                .await;
        };

        let mut assignment = Self::fetch(repo, id).await?;
        Self::ensure_student_owns(&assignment, student_id)?;
        lifecycle::edit_draft(&mut assignment, &dto.content)?;

        repo.commit(&assignment).await
    }

    #[instrument(skip(repo))]
    pub async fn submit(
        repo: &dyn AssignmentRepository,
        student_id: i64,
        dto: SubmitAssignmentDto,
    ) -> Result<Assignment, AppError> {
        let mut assignment = Self::fetch(repo, dto.id).await?;
        Self::ensure_student_owns(&assignment, student_id)?;
        lifecycle::submit(&mut assignment, dto.teacher_id)?;

        repo.commit(&assignment).await
    }

    #[instrument(skip(repo))]
    pub async fn list_for_teacher(
        repo: &dyn AssignmentRepository,
        teacher_id: i64,
    ) -> Result<Vec<Assignment>, AppError> {
        repo.query(&AssignmentFilter::for_teacher(teacher_id)).await
    }

    /// Teachers may only grade work submitted to them.
    #[instrument(skip(repo, policy))]
    pub async fn grade_as_teacher(
        repo: &dyn AssignmentRepository,
        policy: &GradePolicy,
        teacher_id: i64,
        dto: GradeAssignmentDto,
    ) -> Result<Assignment, AppError> {
        let mut assignment = Self::fetch(repo, dto.id).await?;

        if assignment.teacher_id != Some(teacher_id) {
            return Err(DomainError::AssignmentOwnership(
                "This assignment was not submitted to you".to_string(),
            )
            .into());
        }

        lifecycle::grade(&mut assignment, &dto.grade, policy)?;
        repo.commit(&assignment).await
    }

    #[instrument(skip(repo))]
    pub async fn list_for_oversight(
        repo: &dyn AssignmentRepository,
        filter_enabled: bool,
    ) -> Result<Vec<Assignment>, AppError> {
        let filter = if filter_enabled {
            AssignmentFilter::default().with_states(&OVERSIGHT_VISIBLE_STATES)
        } else {
            AssignmentFilter::default()
        };

        repo.query(&filter).await
    }

    /// Grades or regrades any assignment.
    #[instrument(skip(repo, policy))]
    pub async fn grade_as_principal(
        repo: &dyn AssignmentRepository,
        policy: &GradePolicy,
        dto: GradeAssignmentDto,
    ) -> Result<Assignment, AppError> {
        let mut assignment = Self::fetch(repo, dto.id).await?;
        lifecycle::grade(&mut assignment, &dto.grade, policy)?;

        repo.commit(&assignment).await
    }
}
