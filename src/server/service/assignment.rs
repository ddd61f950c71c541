//! Assignments inside a subject.
//!
//! Reads are public. Writes go through the teacher path: the caller must own the teacher
//! id and the subject must be appointed to that teacher.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        assignment::AssignmentRepository,
        relation::{Association, RelationRepository},
        subject::SubjectRepository,
    },
    error::{auth::AuthError, resource::ResourceError, AppError},
    model::{
        assignment::{Assignment, CreateAssignmentParams, UpdateAssignmentParams},
        auth::Claims,
        kind::EntityKind,
    },
    service::user::UserService,
};

/// Service providing business logic for assignments.
pub struct AssignmentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    /// Creates a new AssignmentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a subject's assignments ordered by name.
    ///
    /// # Returns
    /// - `Err(ResourceError::NotFound)` - Subject does not exist
    pub async fn get_all(&self, subject_id: Uuid) -> Result<Vec<Assignment>, AppError> {
        self.ensure_subject(subject_id).await?;

        Ok(AssignmentRepository::new(self.db)
            .get_by_subject(subject_id)
            .await?)
    }

    /// # Returns
    /// - `Err(ResourceError::NotFound)` - Subject does not exist
    /// - `Err(ResourceError::NotInCollection)` - Assignment is not part of the subject
    pub async fn get(&self, subject_id: Uuid, id: Uuid) -> Result<Assignment, AppError> {
        self.ensure_subject(subject_id).await?;

        self.find_in_subject(subject_id, id).await
    }

    /// Adds an assignment to a subject taught by the caller.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - The created assignment
    /// - `Err(AuthError::PermissionDenied)` - Caller is not the teacher or does not teach the subject
    /// - `Err(ResourceError::AlreadyExists)` - Name already used in this subject
    pub async fn create(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        params: CreateAssignmentParams,
    ) -> Result<Assignment, AppError> {
        self.ensure_teaches(claims, teacher_id, params.subject_id)
            .await?;

        let repo = AssignmentRepository::new(self.db);
        if repo
            .name_taken_in_subject(params.subject_id, &params.name, None)
            .await?
        {
            return Err(name_taken(&params.name));
        }

        let assignment = repo.create(params).await?;

        tracing::info!(
            subject_id = %assignment.subject_id,
            assignment_id = %assignment.id,
            "Assignment created"
        );

        Ok(assignment)
    }

    /// Applies a partial update to an assignment of a subject taught by the caller.
    pub async fn update(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        params: UpdateAssignmentParams,
    ) -> Result<Assignment, AppError> {
        self.ensure_teaches(claims, teacher_id, params.subject_id)
            .await?;
        self.find_in_subject(params.subject_id, params.id).await?;

        let repo = AssignmentRepository::new(self.db);
        if let Some(name) = &params.name {
            if repo
                .name_taken_in_subject(params.subject_id, name, Some(params.id))
                .await?
            {
                return Err(name_taken(name));
            }
        }

        let assignment = repo.update(params).await?;

        tracing::info!(assignment_id = %assignment.id, "Assignment updated");

        Ok(assignment)
    }

    pub async fn delete(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        subject_id: Uuid,
        id: Uuid,
    ) -> Result<(), AppError> {
        self.ensure_teaches(claims, teacher_id, subject_id).await?;
        self.find_in_subject(subject_id, id).await?;

        AssignmentRepository::new(self.db).delete(id).await?;

        tracing::info!(assignment_id = %id, "Assignment deleted");

        Ok(())
    }

    async fn ensure_subject(&self, subject_id: Uuid) -> Result<(), AppError> {
        if SubjectRepository::new(self.db)
            .find_entity(subject_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound {
                kind: EntityKind::Subject,
                id: subject_id,
            }
            .into());
        }

        Ok(())
    }

    /// Owner guard on the teacher, then the subject must exist and be appointed to them.
    async fn ensure_teaches(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<(), AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;
        self.ensure_subject(subject_id).await?;

        if !RelationRepository::new(self.db)
            .is_linked(Association::TeacherSubjects, teacher_id, subject_id)
            .await?
        {
            return Err(AuthError::PermissionDenied(claims.sub).into());
        }

        Ok(())
    }

    async fn find_in_subject(&self, subject_id: Uuid, id: Uuid) -> Result<Assignment, AppError> {
        AssignmentRepository::new(self.db)
            .find_in_subject(subject_id, id)
            .await?
            .ok_or_else(|| {
                ResourceError::NotInCollection {
                    item_kind: EntityKind::Assignment,
                    item_id: id,
                    owner_kind: EntityKind::Subject,
                    owner_id: subject_id,
                }
                .into()
            })
    }
}

fn name_taken(name: &str) -> AppError {
    ResourceError::AlreadyExists {
        kind: EntityKind::Assignment,
        value: name.to_string(),
    }
    .into()
}
