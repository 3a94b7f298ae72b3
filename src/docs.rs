use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradebook_auth::{Principal, Role};
use gradebook_models::{
    Assignment, AssignmentState, GradeAssignmentDto, ReadyResponse, SubmitAssignmentDto, Teacher,
    UpsertAssignmentDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::readiness,
        crate::modules::students::controller::list_assignments,
        crate::modules::students::controller::upsert_assignment,
        crate::modules::students::controller::submit_assignment,
        crate::modules::teachers::controller::list_assignments,
        crate::modules::teachers::controller::grade_assignment,
        crate::modules::principals::controller::list_assignments,
        crate::modules::principals::controller::list_teachers,
        crate::modules::principals::controller::grade_assignment,
    ),
    components(
        schemas(
            Assignment,
            AssignmentState,
            Teacher,
            UpsertAssignmentDto,
            SubmitAssignmentDto,
            GradeAssignmentDto,
            ReadyResponse,
            Principal,
            Role,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Readiness probe"),
        (name = "Student", description = "Draft, edit and submit assignments"),
        (name = "Teacher", description = "Review and grade submitted assignments"),
        (name = "Principal", description = "Oversight of assignments and teachers")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Assignment submission and grading for students, teachers and principals.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "principal_header",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "X-Principal",
                    r#"JSON identity assertion, e.g. {"user_id": 5, "principal_id": 1}"#,
                ))),
            )
        }
    }
}
