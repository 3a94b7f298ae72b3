use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::{Assignment, DataResponse, GradeAssignmentDto};

use crate::middleware::role::RequireTeacher;
use crate::modules::assignments::AssignmentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/teacher/assignments",
    responses(
        (status = 200, description = "Assignments submitted to the teacher", body = DataResponse<Vec<Assignment>>),
        (status = 401, description = "Missing, malformed or non-teacher X-Principal header")
    ),
    tag = "Teacher",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn list_assignments(
    State(state): State<AppState>,
    RequireTeacher(principal): RequireTeacher,
) -> Result<Json<DataResponse<Vec<Assignment>>>, AppError> {
    let teacher_id = principal.numeric_id()?;
    let assignments =
        AssignmentService::list_for_teacher(state.assignments.as_ref(), teacher_id).await?;

    Ok(Json(DataResponse::new(assignments)))
}

#[utoipa::path(
    post,
    path = "/teacher/assignments/grade",
    request_body = GradeAssignmentDto,
    responses(
        (status = 200, description = "Assignment graded", body = DataResponse<Assignment>),
        (status = 400, description = "Invalid payload or unrecognized grade"),
        (status = 401, description = "Missing, malformed or non-teacher X-Principal header"),
        (status = 403, description = "Assignment was submitted to another teacher"),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Assignment changed since it was read")
    ),
    tag = "Teacher",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn grade_assignment(
    State(state): State<AppState>,
    RequireTeacher(principal): RequireTeacher,
    ValidatedJson(dto): ValidatedJson<GradeAssignmentDto>,
) -> Result<Json<DataResponse<Assignment>>, AppError> {
    let teacher_id = principal.numeric_id()?;
    let assignment = AssignmentService::grade_as_teacher(
        state.assignments.as_ref(),
        &state.grade_policy,
        teacher_id,
        dto,
    )
    .await?;

    Ok(Json(DataResponse::new(assignment)))
}
