use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::{Assignment, DataResponse, GradeAssignmentDto, Teacher};

use crate::middleware::role::RequirePrincipal;
use crate::modules::assignments::AssignmentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/principal/assignments",
    responses(
        (status = 200, description = "Submitted and graded assignments, or every assignment when the oversight filter is disabled", body = DataResponse<Vec<Assignment>>),
        (status = 401, description = "Missing, malformed or non-principal X-Principal header")
    ),
    tag = "Principal",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn list_assignments(
    State(state): State<AppState>,
    RequirePrincipal(_principal): RequirePrincipal,
) -> Result<Json<DataResponse<Vec<Assignment>>>, AppError> {
    let assignments = AssignmentService::list_for_oversight(
        state.assignments.as_ref(),
        state.grading_config.oversight_filter_enabled,
    )
    .await?;

    Ok(Json(DataResponse::new(assignments)))
}

#[utoipa::path(
    get,
    path = "/principal/teachers",
    responses(
        (status = 200, description = "All teachers", body = DataResponse<Vec<Teacher>>),
        (status = 401, description = "Missing, malformed or non-principal X-Principal header")
    ),
    tag = "Principal",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn list_teachers(
    State(state): State<AppState>,
    RequirePrincipal(_principal): RequirePrincipal,
) -> Result<Json<DataResponse<Vec<Teacher>>>, AppError> {
    let teachers = state.teachers.list().await?;

    Ok(Json(DataResponse::new(teachers)))
}

#[utoipa::path(
    post,
    path = "/principal/assignments/grade",
    request_body = GradeAssignmentDto,
    responses(
        (status = 200, description = "Assignment graded or regraded", body = DataResponse<Assignment>),
        (status = 400, description = "Invalid payload or unrecognized grade"),
        (status = 401, description = "Missing, malformed or non-principal X-Principal header"),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Assignment changed since it was read")
    ),
    tag = "Principal",
    security(("principal_header" = []))
)]
#[instrument(skip(state))]
pub async fn grade_assignment(
    State(state): State<AppState>,
    RequirePrincipal(_principal): RequirePrincipal,
    ValidatedJson(dto): ValidatedJson<GradeAssignmentDto>,
) -> Result<Json<DataResponse<Assignment>>, AppError> {
    let assignment =
        AssignmentService::grade_as_principal(state.assignments.as_ref(), &state.grade_policy, dto)
            .await?;

    Ok(Json(DataResponse::new(assignment)))
}
