use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    group::GroupSummaryDto, specialty::SpecialtySummaryDto, user::UserSummaryDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub credits: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub credits: i16,
    pub teachers: Vec<UserSummaryDto>,
    pub specialties: Vec<SpecialtySummaryDto>,
    pub groups: Vec<GroupSummaryDto>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubjectListDto {
    pub subjects: Vec<SubjectDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSubjectDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub credits: Option<i16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSubjectDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub credits: Option<i16>,
}
