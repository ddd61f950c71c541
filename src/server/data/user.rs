//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for the role-independent `user` table: lookups
//! by id or email, email uniqueness checks and the soft-delete flag. Role-specific
//! repositories reuse the row helpers here when creating or updating users inside their
//! own transactions.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by id regardless of role or activity.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email regardless of role or activity.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether `email` belongs to a user other than `exclude`.
    ///
    /// # Arguments
    /// - `email` - Email to check
    /// - `exclude` - User whose own email should not count as a collision
    pub async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Sets the activity flag; `false` is a soft delete.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated
    /// - `Err(DbErr::RecordNotFound)` - No user with this id
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> Result<(), DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.is_active = ActiveValue::Set(is_active);
        active_model.updated_on = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }
}

/// Inserts a user row for the given role.
///
/// `params.password` must already hold the password hash.
pub(super) async fn insert_user<C: ConnectionTrait>(
    conn: &C,
    params: CreateUserParams,
    role: entity::user::UserRole,
) -> Result<entity::user::Model, DbErr> {
    let now = Utc::now();

    entity::user::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        email: ActiveValue::Set(params.email),
        first_name: ActiveValue::Set(params.first_name),
        last_name: ActiveValue::Set(params.last_name),
        password: ActiveValue::Set(params.password),
        age: ActiveValue::Set(params.age),
        is_active: ActiveValue::Set(true),
        role: ActiveValue::Set(role),
        created_on: ActiveValue::Set(now),
        updated_on: ActiveValue::Set(now),
    }
    .insert(conn)
    .await
}

/// Applies the supplied fields of a partial update to a user row.
///
/// `params.password`, when present, must already hold the password hash.
pub(super) async fn update_user<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    params: UpdateUserParams,
) -> Result<entity::user::Model, DbErr> {
    let user = entity::prelude::User::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

    let mut active_model: entity::user::ActiveModel = user.into();
    if let Some(email) = params.email {
        active_model.email = ActiveValue::Set(email);
    }
    if let Some(first_name) = params.first_name {
        active_model.first_name = ActiveValue::Set(first_name);
    }
    if let Some(last_name) = params.last_name {
        active_model.last_name = ActiveValue::Set(last_name);
    }
    if let Some(password) = params.password {
        active_model.password = ActiveValue::Set(password);
    }
    if let Some(age) = params.age {
        active_model.age = ActiveValue::Set(Some(age));
    }
    active_model.updated_on = ActiveValue::Set(Utc::now());

    active_model.update(conn).await
}

/// Deletes a user row.
pub(super) async fn delete_user<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<u64, DbErr> {
    Ok(entity::prelude::User::delete_by_id(id)
        .exec(conn)
        .await?
        .rows_affected)
}
