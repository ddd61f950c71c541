//! Position domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::position::{CreatePositionDto, PositionDto, UpdatePositionDto},
    server::{error::AppError, model::summary::UserSummary, util::validate::Validator},
};

/// Academic position with the teachers holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub id: Uuid,
    pub position_name: String,
    pub teachers: Vec<UserSummary>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Position {
    pub fn from_entity(entity: entity::position::Model, teachers: Vec<UserSummary>) -> Self {
        Self {
            id: entity.id,
            position_name: entity.position_name,
            teachers,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }

    pub fn into_dto(self) -> PositionDto {
        PositionDto {
            id: self.id,
            position_name: self.position_name,
            teachers: self.teachers.into_iter().map(UserSummary::into_dto).collect(),
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePositionParams {
    pub position_name: String,
}

impl CreatePositionParams {
    pub fn from_dto(dto: CreatePositionDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let position_name = v.require("position_name", dto.position_name);
        if let Some(name) = &position_name {
            v.position_name("position_name", name);
        }
        v.finish()?;

        Ok(Self {
            position_name: position_name.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePositionParams {
    pub id: Uuid,
    pub position_name: Option<String>,
}

impl UpdatePositionParams {
    pub fn from_dto(id: Uuid, dto: UpdatePositionDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        if let Some(name) = &dto.position_name {
            v.position_name("position_name", name);
        }
        v.finish()?;

        Ok(Self {
            id,
            position_name: dto.position_name,
        })
    }
}
