//! Group factory for creating test groups.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::{factory::helpers::next_id, fixture::DEFAULT_YEAR};

/// Factory for creating test groups.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    year: i32,
    credits_per_student: i16,
    curator_id: Option<Uuid>,
    specialty_id: Option<Uuid>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory named `"Group {id}"` with 60 credits per student.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
            year: DEFAULT_YEAR,
            credits_per_student: 60,
            curator_id: None,
            specialty_id: None,
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

    pub fn curator_id(mut self, curator_id: Uuid) -> Self {
        self.curator_id = Some(curator_id);
        self
    }

    pub fn specialty_id(mut self, specialty_id: Uuid) -> Self {
        self.specialty_id = Some(specialty_id);
        self
    }

    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let now = Utc::now();
        entity::group::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
            credits_per_student: ActiveValue::Set(self.credits_per_student),
            curator_id: ActiveValue::Set(self.curator_id),
            specialty_id: ActiveValue::Set(self.specialty_id),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
