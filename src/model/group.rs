use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    specialty::SpecialtySummaryDto, subject::SubjectSummaryDto, user::UserSummaryDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub credits_per_student: i16,
    pub curator_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
    pub specialty: Option<SpecialtySummaryDto>,
    pub students: Vec<UserSummaryDto>,
    pub subjects: Vec<SubjectSummaryDto>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupListDto {
    pub groups: Vec<GroupDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub credits_per_student: Option<i16>,
    pub curator_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub credits_per_student: Option<i16>,
    pub curator_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
}
