use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    group::GroupSummaryDto, position::PositionSummaryDto, specialty::SpecialtySummaryDto,
    subject::SubjectSummaryDto,
};

/// Compact user representation nested inside other resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i16>,
    pub is_active: bool,
    pub year_of_study: i16,
    pub groups: Vec<GroupSummaryDto>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i16>,
    pub is_active: bool,
    pub position_id: Option<Uuid>,
    pub position: Option<PositionSummaryDto>,
    pub subjects: Vec<SubjectSummaryDto>,
    /// Specialties this teacher heads.
    pub specialties: Vec<SpecialtySummaryDto>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentListDto {
    pub students: Vec<StudentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeacherListDto {
    pub teachers: Vec<TeacherDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    /// Password confirmation.
    pub password1: Option<String>,
    pub age: Option<i16>,
    pub year_of_study: Option<i16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTeacherDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    /// Password confirmation.
    pub password1: Option<String>,
    pub age: Option<i16>,
    pub position_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub password1: Option<String>,
    pub age: Option<i16>,
    pub year_of_study: Option<i16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeacherDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub password1: Option<String>,
    pub age: Option<i16>,
    pub position_id: Option<Uuid>,
}
