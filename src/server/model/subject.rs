//! Subject domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::subject::{CreateSubjectDto, SubjectDto, UpdateSubjectDto},
    server::{
        error::AppError,
        model::summary::{GroupSummary, SpecialtySummary, UserSummary},
        util::validate::Validator,
    },
};

/// Subject with the teachers, specialties and groups it is linked to.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub credits: i16,
    pub teachers: Vec<UserSummary>,
    pub specialties: Vec<SpecialtySummary>,
    pub groups: Vec<GroupSummary>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Subject {
    pub fn from_entity(
        entity: entity::subject::Model,
        teachers: Vec<UserSummary>,
        specialties: Vec<SpecialtySummary>,
        groups: Vec<GroupSummary>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            credits: entity.credits,
            teachers,
            specialties,
            groups,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }

    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.id,
            name: self.name,
            year: self.year,
            credits: self.credits,
            teachers: self.teachers.into_iter().map(UserSummary::into_dto).collect(),
            specialties: self
                .specialties
                .into_iter()
                .map(SpecialtySummary::into_dto)
                .collect(),
            groups: self.groups.into_iter().map(GroupSummary::into_dto).collect(),
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSubjectParams {
    pub name: String,
    pub year: i32,
    pub credits: i16,
}

impl CreateSubjectParams {
    pub fn from_dto(dto: CreateSubjectDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let name = v.require("name", dto.name);
        let year = v.require("year", dto.year);
        let credits = v.require("credits", dto.credits);
        if let Some(name) = &name {
            v.name("name", name);
        }
        if let Some(year) = year {
            v.year("year", year);
        }
        if let Some(credits) = credits {
            v.credits("credits", credits);
        }
        v.finish()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            year: year.unwrap_or_default(),
            credits: credits.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubjectParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub credits: Option<i16>,
}

impl UpdateSubjectParams {
    pub fn from_dto(id: Uuid, dto: UpdateSubjectDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        if let Some(name) = &dto.name {
            v.name("name", name);
        }
        if let Some(year) = dto.year {
            v.year("year", year);
        }
        if let Some(credits) = dto.credits {
            v.credits("credits", credits);
        }
        v.finish()?;

        Ok(Self {
            id,
            name: dto.name,
            year: dto.year,
            credits: dto.credits,
        })
    }
}
