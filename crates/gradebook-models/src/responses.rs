use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub time: DateTime<Utc>,
}
