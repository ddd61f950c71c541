//! Position factory for creating test positions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Creates a position named `"Position {id}"`.
pub async fn create_position(db: &DatabaseConnection) -> Result<entity::position::Model, DbErr> {
    create_position_named(db, format!("Position {}", next_id())).await
}

/// Creates a position with the given name.
pub async fn create_position_named(
    db: &DatabaseConnection,
    position_name: impl Into<String>,
) -> Result<entity::position::Model, DbErr> {
    let now = Utc::now();
    entity::position::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        position_name: ActiveValue::Set(position_name.into()),
        created_on: ActiveValue::Set(now),
        updated_on: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
