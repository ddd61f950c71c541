//! Specialty domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::specialty::{CreateSpecialtyDto, SpecialtyDto, UpdateSpecialtyDto},
    server::{
        error::AppError,
        model::summary::{GroupSummary, SubjectSummary},
        util::validate::Validator,
    },
};

/// Specialty with its head teacher, groups and curriculum subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub teacher_id: Option<Uuid>,
    pub groups: Vec<GroupSummary>,
    pub subjects: Vec<SubjectSummary>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Specialty {
    pub fn from_entity(
        entity: entity::specialty::Model,
        groups: Vec<GroupSummary>,
        subjects: Vec<SubjectSummary>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            teacher_id: entity.teacher_id,
            groups,
            subjects,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }

    pub fn into_dto(self) -> SpecialtyDto {
        SpecialtyDto {
            id: self.id,
            name: self.name,
            year: self.year,
            teacher_id: self.teacher_id,
            groups: self.groups.into_iter().map(GroupSummary::into_dto).collect(),
            subjects: self.subjects.into_iter().map(SubjectSummary::into_dto).collect(),
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSpecialtyParams {
    pub name: String,
    pub year: i32,
    pub teacher_id: Option<Uuid>,
}

impl CreateSpecialtyParams {
    pub fn from_dto(dto: CreateSpecialtyDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let name = v.require("name", dto.name);
        let year = v.require("year", dto.year);
        if let Some(name) = &name {
            v.name("name", name);
        }
        if let Some(year) = year {
            v.year("year", year);
        }
        v.finish()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            year: year.unwrap_or_default(),
            teacher_id: dto.teacher_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSpecialtyParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub teacher_id: Option<Uuid>,
}

impl UpdateSpecialtyParams {
    pub fn from_dto(id: Uuid, dto: UpdateSpecialtyDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        if let Some(name) = &dto.name {
            v.name("name", name);
        }
        if let Some(year) = dto.year {
            v.year("year", year);
        }
        v.finish()?;

        Ok(Self {
            id,
            name: dto.name,
            year: dto.year,
            teacher_id: dto.teacher_id,
        })
    }
}
