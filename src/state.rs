use std::sync::Arc;

use gradebook_config::{CorsConfig, GradingConfig};
use gradebook_db::{
    AssignmentRepository, PgAssignmentRepository, PgTeacherRepository, TeacherRepository,
    init_db_pool, run_migrations,
};

use crate::modules::assignments::GradePolicy;

#[derive(Clone)]
pub struct AppState {
    pub assignments: Arc<dyn AssignmentRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub grade_policy: GradePolicy,
    pub grading_config: GradingConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        teachers: Arc<dyn TeacherRepository>,
        grading_config: GradingConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            assignments,
            teachers,
            grade_policy: GradePolicy::from_config(&grading_config),
            grading_config,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;

    Ok(AppState::new(
        Arc::new(PgAssignmentRepository::new(pool.clone())),
        Arc::new(PgTeacherRepository::new(pool)),
        GradingConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
