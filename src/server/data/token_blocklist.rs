//! Revoked token storage.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

pub struct TokenBlocklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenBlocklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a token id as revoked. Revoking twice is a no-op.
    pub async fn add(&self, jti: Uuid) -> Result<(), DbErr> {
        if self.is_revoked(jti).await? {
            return Ok(());
        }

        entity::token_blocklist::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            created_on: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_revoked(&self, jti: Uuid) -> Result<bool, DbErr> {
        Ok(entity::prelude::TokenBlocklist::find_by_id(jti.to_string())
            .one(self.db)
            .await?
            .is_some())
    }
}
