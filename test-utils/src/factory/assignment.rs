//! Assignment factory for creating test assignments.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Creates an assignment in `subject_id` named `"Assignment {id}"`, due in a week.
pub async fn create_assignment(
    db: &DatabaseConnection,
    subject_id: Uuid,
) -> Result<entity::assignment::Model, DbErr> {
    create_assignment_named(db, subject_id, format!("Assignment {}", next_id())).await
}

/// Creates an assignment in `subject_id` with the given name.
pub async fn create_assignment_named(
    db: &DatabaseConnection,
    subject_id: Uuid,
    name: impl Into<String>,
) -> Result<entity::assignment::Model, DbErr> {
    let now = Utc::now();
    entity::assignment::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.into()),
        max_mark: ActiveValue::Set(100),
        deadline: ActiveValue::Set(Some(now + Duration::days(7))),
        subject_id: ActiveValue::Set(subject_id),
        created_on: ActiveValue::Set(now),
        updated_on: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
