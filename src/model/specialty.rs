use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{group::GroupSummaryDto, subject::SubjectSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpecialtySummaryDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    /// Head of the specialty.
    pub teacher_id: Option<Uuid>,
    pub groups: Vec<GroupSummaryDto>,
    pub subjects: Vec<SubjectSummaryDto>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyListDto {
    pub specialties: Vec<SpecialtyDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSpecialtyDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSpecialtyDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub teacher_id: Option<Uuid>,
}
