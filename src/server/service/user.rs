//! Checks shared by every user role.
//!
//! Path-addressed users go through [`UserService::find_active`]; users referenced from a
//! request body (a specialty head, a group curator) go through
//! [`UserService::find_referenced`], which reports a missing user differently.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, resource::ResourceError, AppError},
    model::{auth::Claims, kind::EntityKind},
    util::password::hash_password,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads an active user of `role` addressed by the request path.
    ///
    /// # Returns
    /// - `Ok(user)` - User exists, has `role` and is active
    /// - `Err(ResourceError::NotFound)` - No user of this role
    /// - `Err(ResourceError::NotActive)` - User was soft-deleted
    pub async fn find_active(
        &self,
        role: UserRole,
        kind: EntityKind,
        id: Uuid,
    ) -> Result<entity::user::Model, AppError> {
        self.find_with_role(role, kind, id, || ResourceError::NotFound { kind, id })
            .await
    }

    /// Loads an active user of `role` referenced from a request body.
    ///
    /// # Returns
    /// - `Err(ResourceError::UserDoesNotExist)` - No user of this role
    /// - `Err(ResourceError::NotActive)` - User was soft-deleted
    pub async fn find_referenced(
        &self,
        role: UserRole,
        kind: EntityKind,
        id: Uuid,
    ) -> Result<entity::user::Model, AppError> {
        self.find_with_role(role, kind, id, || ResourceError::UserDoesNotExist { kind, id })
            .await
    }

    /// Active user guard followed by the ownership check on the token identity.
    pub async fn find_owned(
        &self,
        claims: &Claims,
        role: UserRole,
        kind: EntityKind,
        id: Uuid,
    ) -> Result<entity::user::Model, AppError> {
        let user = self.find_active(role, kind, id).await?;
        claims.ensure_owner(user.id)?;

        Ok(user)
    }

    /// Fails if `email` belongs to a user other than `exclude`.
    pub async fn ensure_email_free(
        &self,
        kind: EntityKind,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .email_taken(email, exclude)
            .await?
        {
            return Err(ResourceError::AlreadyExists {
                kind,
                value: email.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Soft-deletes a user by clearing its activity flag.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        UserRepository::new(self.db).set_active(id, false).await?;

        tracing::info!(user_id = %id, "User deactivated");

        Ok(())
    }

    async fn find_with_role(
        &self,
        role: UserRole,
        kind: EntityKind,
        id: Uuid,
        missing: impl FnOnce() -> ResourceError,
    ) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|user| user.role == role)
            .ok_or_else(missing)?;

        if !user.is_active {
            return Err(ResourceError::NotActive { kind, id }.into());
        }

        Ok(user)
    }
}

/// Checks the confirmation and returns the hash to store.
pub(super) fn confirm_and_hash(password: &str, confirmation: Option<&str>) -> Result<String, AppError> {
    if confirmation != Some(password) {
        return Err(AuthError::PasswordMismatch.into());
    }

    Ok(hash_password(password)?)
}
