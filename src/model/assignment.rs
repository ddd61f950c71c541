use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: Uuid,
    pub name: String,
    pub max_mark: i16,
    pub deadline: Option<DateTime<Utc>>,
    pub subject_id: Uuid,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentListDto {
    pub assignments: Vec<AssignmentDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateAssignmentDto {
    pub name: Option<String>,
    pub max_mark: Option<i16>,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAssignmentDto {
    pub name: Option<String>,
    pub max_mark: Option<i16>,
    pub deadline: Option<DateTime<Utc>>,
    /// Rejected when present; assignments cannot move between subjects.
    #[schema(value_type = Option<Uuid>)]
    pub subject_id: Option<serde_json::Value>,
}
