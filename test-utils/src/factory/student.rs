//! Student factory creating a user row and its student row.

use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::user::UserFactory;

/// Factory for creating test students.
///
/// Wraps a [`UserFactory`] so user fields can be customized through [`StudentFactory::user`].
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    user: UserFactory<'a>,
    year_of_study: i16,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory in year 1 with default user fields.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user: UserFactory::new(db).role(UserRole::Student),
            year_of_study: 1,
        }
    }

    /// Customizes the underlying user row.
    pub fn user(mut self, f: impl FnOnce(UserFactory<'a>) -> UserFactory<'a>) -> Self {
        self.user = f(self.user);
        self
    }

    pub fn year_of_study(mut self, year_of_study: i16) -> Self {
        self.year_of_study = year_of_study;
        self
    }

    /// Builds and inserts the user and student rows.
    ///
    /// # Returns
    /// - `Ok((user, student))` - Created rows
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
        let user = self.user.role(UserRole::Student).build().await?;
        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(user.id),
            year_of_study: ActiveValue::Set(self.year_of_study),
        }
        .insert(self.db)
        .await?;

        Ok((user, student))
    }
}

/// Creates an active student with default values.
pub async fn create_student(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
    StudentFactory::new(db).build().await
}
