//! Subject factory for creating test subjects.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::{factory::helpers::next_id, fixture::DEFAULT_YEAR};

/// Factory for creating test subjects.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    year: i32,
    credits: i16,
}

impl<'a> SubjectFactory<'a> {
    /// Creates a new SubjectFactory named `"Subject {id}"` worth 5 credits.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Subject {}", next_id()),
            year: DEFAULT_YEAR,
            credits: 5,
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

    pub fn credits(mut self, credits: i16) -> Self {
        self.credits = credits;
        self
    }

    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        let now = Utc::now();
        entity::subject::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
            credits: ActiveValue::Set(self.credits),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}
