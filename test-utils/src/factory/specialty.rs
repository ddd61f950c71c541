//! Specialty factory for creating test specialties.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::{factory::helpers::next_id, fixture::DEFAULT_YEAR};

/// Factory for creating test specialties.
pub struct SpecialtyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    year: i32,
    teacher_id: Option<Uuid>,
}

impl<'a> SpecialtyFactory<'a> {
    /// Creates a new SpecialtyFactory named `"Specialty {id}"` with no head teacher.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Specialty {}", next_id()),
            year: DEFAULT_YEAR,
            teacher_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the head teacher of the specialty.
    pub fn teacher_id(mut self, teacher_id: Uuid) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub async fn build(self) -> Result<entity::specialty::Model, DbErr> {
        let now = Utc::now();
        entity::specialty::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
            teacher_id: ActiveValue::Set(self.teacher_id),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a specialty with default values.
pub async fn create_specialty(db: &DatabaseConnection) -> Result<entity::specialty::Model, DbErr> {
    SpecialtyFactory::new(db).build().await
}
