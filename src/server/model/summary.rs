//! Compact representations of related records.
//!
//! Nested inside the serialized form of a resource so that relations can be shown
//! without recursing into the related record's own relations.

use uuid::Uuid;

use crate::model::{
    group::GroupSummaryDto, position::PositionSummaryDto, specialty::SpecialtySummaryDto,
    subject::SubjectSummaryDto, user::UserSummaryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSummary {
    pub id: Uuid,
    pub position_name: String,
}

impl PositionSummary {
    pub fn from_entity(entity: entity::position::Model) -> Self {
        Self {
            id: entity.id,
            position_name: entity.position_name,
        }
    }

    pub fn into_dto(self) -> PositionSummaryDto {
        PositionSummaryDto {
            id: self.id,
            position_name: self.position_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecialtySummary {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
}

impl SpecialtySummary {
    pub fn from_entity(entity: entity::specialty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
        }
    }

    pub fn into_dto(self) -> SpecialtySummaryDto {
        SpecialtySummaryDto {
            id: self.id,
            name: self.name,
            year: self.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
}

impl GroupSummary {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
        }
    }

    pub fn into_dto(self) -> GroupSummaryDto {
        GroupSummaryDto {
            id: self.id,
            name: self.name,
            year: self.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSummary {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub credits: i16,
}

impl SubjectSummary {
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year: entity.year,
            credits: entity.credits,
        }
    }

    pub fn into_dto(self) -> SubjectSummaryDto {
        SubjectSummaryDto {
            id: self.id,
            name: self.name,
            year: self.year,
            credits: self.credits,
        }
    }
}
