//! Teacher factory creating a user row and its teacher row.

use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::user::UserFactory;

/// Factory for creating test teachers.
///
/// Without an explicit [`TeacherFactory::position_id`] the teacher holds no position.
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    user: UserFactory<'a>,
    position_id: Option<Uuid>,
}

impl<'a> TeacherFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user: UserFactory::new(db).role(UserRole::Teacher),
            position_id: None,
        }
    }

    /// Customizes the underlying user row.
    pub fn user(mut self, f: impl FnOnce(UserFactory<'a>) -> UserFactory<'a>) -> Self {
        self.user = f(self.user);
        self
    }

    pub fn position_id(mut self, position_id: Uuid) -> Self {
        self.position_id = Some(position_id);
        self
    }

    /// Builds and inserts the user and teacher rows.
    ///
    /// # Returns
    /// - `Ok((user, teacher))` - Created rows
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::user::Model, entity::teacher::Model), DbErr> {
        let user = self.user.role(UserRole::Teacher).build().await?;
        let teacher = entity::teacher::ActiveModel {
            id: ActiveValue::Set(user.id),
            position_id: ActiveValue::Set(self.position_id),
        }
        .insert(self.db)
        .await?;

        Ok((user, teacher))
    }
}

/// Creates an active teacher without a position.
pub async fn create_teacher(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::teacher::Model), DbErr> {
    TeacherFactory::new(db).build().await
}

/// Creates an active teacher holding `position_id`.
pub async fn create_teacher_with_position(
    db: &DatabaseConnection,
    position_id: Uuid,
) -> Result<(entity::user::Model, entity::teacher::Model), DbErr> {
    TeacherFactory::new(db).position_id(position_id).build().await
}
