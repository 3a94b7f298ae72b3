use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::{Assignment, DataResponse, SubmitAssignmentDto, UpsertAssignmentDto};

use crate::middleware::role::RequireStudent;
use crate::modules::assignments::AssignmentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/student/assignments",
    responses(
        (status = 200, description = "The student's own assignments", body = DataResponse<Vec<Assignment>>),
        (status = 401, description = "Missing, malformed or non-student X-Principal header")
    ),
    tag = "Student",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn list_assignments(
    State(state): State<AppState>,
    RequireStudent(principal): RequireStudent,
) -> Result<Json<DataResponse<Vec<Assignment>>>, AppError> {
    let student_id = principal.numeric_id()?;
    let assignments =
        AssignmentService::list_for_student(state.assignments.as_ref(), student_id).await?;

    Ok(Json(DataResponse::new(assignments)))
}

#[utoipa::path(
    post,
    path = "/student/assignments",
    request_body = UpsertAssignmentDto,
    responses(
        (status = 200, description = "Draft created or edited", body = DataResponse<Assignment>),
        (status = 400, description = "Invalid payload, blank content or assignment no longer a draft"),
        (status = 401, description = "Missing, malformed or non-student X-Principal header"),
        (status = 403, description = "Assignment belongs to another student"),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Assignment changed since it was read")
    ),
    tag = "Student",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn upsert_assignment(
    State(state): State<AppState>,
    RequireStudent(principal): RequireStudent,
    ValidatedJson(dto): ValidatedJson<UpsertAssignmentDto>,
) -> Result<Json<DataResponse<Assignment>>, AppError> {
    let student_id = principal.numeric_id()?;
    let assignment =
        AssignmentService::upsert_draft(state.assignments.as_ref(), student_id, dto).await?;

    Ok(Json(DataResponse::new(assignment)))
}

#[utoipa::path(
    post,
    path = "/student/assignments/submit",
    request_body = SubmitAssignmentDto,
    responses(
        (status = 200, description = "Assignment submitted", body = DataResponse<Assignment>),
        (status = 400, description = "Invalid payload, unknown teacher or assignment already graded"),
        (status = 401, description = "Missing, malformed or non-student X-Principal header"),
        (status = 403, description = "Assignment belongs to another student"),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Assignment changed since it was read")
    ),
    tag = "Student",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn submit_assignment(
    State(state): State<AppState>,
    RequireStudent(principal): RequireStudent,
    ValidatedJson(dto): ValidatedJson<SubmitAssignmentDto>,
) -> Result<Json<DataResponse<Assignment>>, AppError> {
    let student_id = principal.numeric_id()?;
    let assignment =
        AssignmentService::submit(state.assignments.as_ref(), student_id, dto).await?;

    Ok(Json(DataResponse::new(assignment)))
}
