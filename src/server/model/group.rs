//! Group domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    server::{
        error::AppError,
        model::summary::{SpecialtySummary, SubjectSummary, UserSummary},
        util::validate::Validator,
    },
};

/// Study group with its curator, specialty, students and subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub credits_per_student: i16,
    /// Teacher responsible for the group; only they may change its membership.
    pub curator_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
    pub specialty: Option<SpecialtySummary>,
    pub students: Vec<UserSummary>,
    pub subjects: Vec<SubjectSummary>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Group {
    pub fn from_entity(
        entity: entity::group::Model,
        specialty: Option<SpecialtySummary>,
        students: Vec<UserSummary>,
        subjects: Vec<SubjectSummary>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            credits_per_student: entity.credits_per_student,
            curator_id: entity.curator_id,
            specialty_id: entity.specialty_id,
            specialty,
            students,
            subjects,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            year: self.year,
            credits_per_student: self.credits_per_student,
            curator_id: self.curator_id,
            specialty_id: self.specialty_id,
            specialty: self.specialty.map(SpecialtySummary::into_dto),
            students: self.students.into_iter().map(UserSummary::into_dto).collect(),
            subjects: self.subjects.into_iter().map(SubjectSummary::into_dto).collect(),
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub name: String,
    pub year: i32,
    pub credits_per_student: i16,
    pub curator_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let name = v.require("name", dto.name);
        let year = v.require("year", dto.year);
        let credits = v.require("credits_per_student", dto.credits_per_student);
        if let Some(name) = &name {
            v.name("name", name);
        }
        if let Some(year) = year {
            v.year("year", year);
        }
        if let Some(credits) = credits {
            v.credits_per_student("credits_per_student", credits);
        }
        v.finish()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            year: year.unwrap_or_default(),
            credits_per_student: credits.unwrap_or_default(),
            curator_id: dto.curator_id,
            specialty_id: dto.specialty_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub credits_per_student: Option<i16>,
    pub curator_id: Option<Uuid>,
    pub specialty_id: Option<Uuid>,
}

impl UpdateGroupParams {
    pub fn from_dto(id: Uuid, dto: UpdateGroupDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        if let Some(name) = &dto.name {
            v.name("name", name);
        }
        if let Some(year) = dto.year {
            v.year("year", year);
        }
        if let Some(credits) = dto.credits_per_student {
            v.credits_per_student("credits_per_student", credits);
        }
        v.finish()?;

        Ok(Self {
            id,
            name: dto.name,
            year: dto.year,
            credits_per_student: dto.credits_per_student,
            curator_id: dto.curator_id,
            specialty_id: dto.specialty_id,
        })
    }
}
