//! Teacher registration and self-service account management.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{position::PositionRepository, teacher::TeacherRepository},
    error::{internal::InternalError, resource::ResourceError, AppError},
    model::{
        auth::Claims,
        kind::EntityKind,
        user::{CreateTeacherParams, Teacher, UpdateTeacherParams},
    },
    service::user::{confirm_and_hash, UserService},
};

/// Service providing business logic for teachers.
pub struct TeacherService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    /// Creates a new TeacherService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a teacher holding an existing position.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created teacher
    /// - `Err(ResourceError::AlreadyExists)` - Email already registered
    /// - `Err(AuthError::PasswordMismatch)` - `password1` differs from `password`
    /// - `Err(ResourceError::ReferenceDoesNotExist)` - Unknown position
    pub async fn create(&self, mut params: CreateTeacherParams) -> Result<Teacher, AppError> {
        UserService::new(self.db)
            .ensure_email_free(EntityKind::Teacher, &params.user.email, None)
            .await?;
        params.user.password = confirm_and_hash(
            &params.user.password,
            Some(&params.user.password_confirmation),
        )?;
        self.ensure_position(params.position_id).await?;

        let teacher = TeacherRepository::new(self.db).create(params).await?;

        tracing::info!(teacher_id = %teacher.profile.id, "Teacher created");

        Ok(teacher)
    }

    /// Lists active teachers.
    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_all_active().await?)
    }

    /// Gets an active teacher.
    pub async fn get(&self, id: Uuid) -> Result<Teacher, AppError> {
        UserService::new(self.db)
            .find_active(UserRole::Teacher, EntityKind::Teacher, id)
            .await?;

        self.load(id).await
    }

    /// Applies a partial update on behalf of the teacher themself.
    ///
    /// # Returns
    /// - `Err(ResourceError::NotFound | NotActive)` - Active user guard failed
    /// - `Err(AuthError::PermissionDenied)` - Token identity is another user
    /// - `Err(ResourceError::AlreadyExists)` - New email is taken
    /// - `Err(AuthError::PasswordMismatch)` - New password not confirmed
    /// - `Err(ResourceError::ReferenceDoesNotExist)` - Unknown position
    pub async fn update(
        &self,
        claims: &Claims,
        mut params: UpdateTeacherParams,
    ) -> Result<Teacher, AppError> {
        let users = UserService::new(self.db);
        users
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, params.id)
            .await?;

        if let Some(email) = &params.user.email {
            users
                .ensure_email_free(EntityKind::Teacher, email, Some(params.id))
                .await?;
        }
        if let Some(password) = &params.user.password {
            let hash = confirm_and_hash(password, params.user.password_confirmation.as_deref())?;
            params.user.password = Some(hash);
        }
        if let Some(position_id) = params.position_id {
            self.ensure_position(position_id).await?;
        }

        let teacher = TeacherRepository::new(self.db).update(params).await?;

        tracing::info!(teacher_id = %teacher.profile.id, "Teacher updated");

        Ok(teacher)
    }

    /// Marks the teacher inactive.
    pub async fn soft_delete(&self, claims: &Claims, id: Uuid) -> Result<(), AppError> {
        let users = UserService::new(self.db);
        users
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, id)
            .await?;

        users.deactivate(id).await
    }

    /// Permanently deletes the teacher, detaching them from everything they led.
    pub async fn hard_delete(&self, claims: &Claims, id: Uuid) -> Result<(), AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, id)
            .await?;

        TeacherRepository::new(self.db).delete(id).await?;

        tracing::info!(teacher_id = %id, "Teacher deleted");

        Ok(())
    }

    pub(super) async fn load(&self, id: Uuid) -> Result<Teacher, AppError> {
        TeacherRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    kind: EntityKind::Teacher.to_string(),
                    id: id.to_string(),
                }
                .into()
            })
    }

    async fn ensure_position(&self, position_id: Uuid) -> Result<(), AppError> {
        if !PositionRepository::new(self.db).exists(position_id).await? {
            return Err(ResourceError::ReferenceDoesNotExist {
                kind: EntityKind::Position,
                id: position_id,
            }
            .into());
        }

        Ok(())
    }
}
