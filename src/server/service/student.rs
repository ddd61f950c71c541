//! Student registration and self-service account management.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::student::StudentRepository,
    error::{internal::InternalError, AppError},
    model::{
        auth::Claims,
        kind::EntityKind,
        user::{CreateStudentParams, Student, UpdateStudentParams},
    },
    service::user::{confirm_and_hash, UserService},
};

/// Service providing business logic for students.
pub struct StudentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new StudentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(ResourceError::AlreadyExists)` - Email already registered
    /// - `Err(AuthError::PasswordMismatch)` - `password1` differs from `password`
    pub async fn create(&self, mut params: CreateStudentParams) -> Result<Student, AppError> {
        UserService::new(self.db)
            .ensure_email_free(EntityKind::Student, &params.user.email, None)
            .await?;
        params.user.password = confirm_and_hash(
            &params.user.password,
            Some(&params.user.password_confirmation),
        )?;

        let student = StudentRepository::new(self.db).create(params).await?;

        tracing::info!(student_id = %student.profile.id, "Student created");

        Ok(student)
    }

    /// Lists active students.
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_all_active().await?)
    }

    /// Gets an active student.
    pub async fn get(&self, id: Uuid) -> Result<Student, AppError> {
        UserService::new(self.db)
            .find_active(UserRole::Student, EntityKind::Student, id)
            .await?;

        self.load(id).await
    }

    /// Applies a partial update on behalf of the student themself.
    ///
    /// # Returns
    /// - `Err(ResourceError::NotFound | NotActive)` - Active user guard failed
    /// - `Err(AuthError::PermissionDenied)` - Token identity is another user
    /// - `Err(ResourceError::AlreadyExists)` - New email is taken
    /// - `Err(AuthError::PasswordMismatch)` - New password not confirmed
    pub async fn update(
        &self,
        claims: &Claims,
        mut params: UpdateStudentParams,
    ) -> Result<Student, AppError> {
        let users = UserService::new(self.db);
        users
            .find_owned(claims, UserRole::Student, EntityKind::Student, params.id)
            .await?;

        if let Some(email) = &params.user.email {
            users
                .ensure_email_free(EntityKind::Student, email, Some(params.id))
                .await?;
        }
        if let Some(password) = &params.user.password {
            let hash = confirm_and_hash(password, params.user.password_confirmation.as_deref())?;
            params.user.password = Some(hash);
        }

        let student = StudentRepository::new(self.db).update(params).await?;

        tracing::info!(student_id = %student.profile.id, "Student updated");

        Ok(student)
    }

    /// Marks the student inactive.
    pub async fn soft_delete(&self, claims: &Claims, id: Uuid) -> Result<(), AppError> {
        let users = UserService::new(self.db);
        users
            .find_owned(claims, UserRole::Student, EntityKind::Student, id)
            .await?;

        users.deactivate(id).await
    }

    /// Permanently deletes the student and their group memberships.
    pub async fn hard_delete(&self, claims: &Claims, id: Uuid) -> Result<(), AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Student, EntityKind::Student, id)
            .await?;

        StudentRepository::new(self.db).delete(id).await?;

        tracing::info!(student_id = %id, "Student deleted");

        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Student, AppError> {
        StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    kind: EntityKind::Student.to_string(),
                    id: id.to_string(),
                }
                .into()
            })
    }
}
