//! Subject catalogue and the teacher-owned subject endpoints.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        relation::{Association, RelationRepository},
        subject::SubjectRepository,
    },
    error::{resource::ResourceError, AppError},
    model::{
        auth::Claims,
        kind::EntityKind,
        subject::{CreateSubjectParams, Subject, UpdateSubjectParams},
    },
    service::user::UserService,
};

/// Service providing business logic for subjects.
pub struct SubjectService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    /// Creates a new SubjectService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Subject>, AppError> {
        Ok(SubjectRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(ResourceError::NotFound)` - No subject with this id
    pub async fn get(&self, id: Uuid) -> Result<Subject, AppError> {
        SubjectRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists subjects appointed to an active teacher.
    pub async fn teacher_subjects(&self, teacher_id: Uuid) -> Result<Vec<Subject>, AppError> {
        UserService::new(self.db)
            .find_active(UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;

        Ok(SubjectRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?)
    }

    /// Gets one subject through the teacher it is appointed to.
    ///
    /// # Returns
    /// - `Err(ResourceError::NotFound)` - Teacher or subject missing
    /// - `Err(ResourceError::NotActive)` - Teacher was soft-deleted
    /// - `Err(ResourceError::NotInCollection)` - Subject is not appointed to the teacher
    pub async fn get_teacher_subject(
        &self,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<Subject, AppError> {
        UserService::new(self.db)
            .find_active(UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;
        self.ensure_appointed(teacher_id, subject_id).await?;

        self.get(subject_id).await
    }

    /// Creates a subject and appoints it to the calling teacher.
    pub async fn create_teacher_subject(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        params: CreateSubjectParams,
    ) -> Result<Subject, AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;

        let repo = SubjectRepository::new(self.db);
        if repo
            .name_and_year_taken(&params.name, params.year, None)
            .await?
        {
            return Err(name_and_year_taken(params.name, params.year));
        }

        let subject = repo.create_for_teacher(teacher_id, params).await?;

        tracing::info!(
            teacher_id = %teacher_id,
            subject_id = %subject.id,
            "Subject created for teacher"
        );

        Ok(subject)
    }

    /// Updates a subject appointed to the calling teacher.
    pub async fn update_teacher_subject(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        params: UpdateSubjectParams,
    ) -> Result<Subject, AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;
        let current = self.ensure_appointed(teacher_id, params.id).await?;

        let repo = SubjectRepository::new(self.db);
        if params.name.is_some() || params.year.is_some() {
            let name = params.name.clone().unwrap_or(current.name);
            let year = params.year.unwrap_or(current.year);
            if repo
                .name_and_year_taken(&name, year, Some(params.id))
                .await?
            {
                return Err(name_and_year_taken(name, year));
            }
        }

        let subject = repo.update(params).await?;

        tracing::info!(subject_id = %subject.id, "Subject updated");

        Ok(subject)
    }

    /// Deletes a subject appointed to the calling teacher, with its links and assignments.
    pub async fn delete_teacher_subject(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<(), AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;
        self.ensure_appointed(teacher_id, subject_id).await?;

        if !SubjectRepository::new(self.db).delete(subject_id).await? {
            return Err(not_found(subject_id));
        }

        tracing::info!(subject_id = %subject_id, "Subject deleted");

        Ok(())
    }

    /// Returns the subject row when it exists and is appointed to the teacher.
    async fn ensure_appointed(
        &self,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<entity::subject::Model, AppError> {
        let subject = SubjectRepository::new(self.db)
            .find_entity(subject_id)
            .await?
            .ok_or_else(|| not_found(subject_id))?;

        if !RelationRepository::new(self.db)
            .is_linked(Association::TeacherSubjects, teacher_id, subject_id)
            .await?
        {
            return Err(ResourceError::NotInCollection {
                item_kind: EntityKind::Subject,
                item_id: subject_id,
                owner_kind: EntityKind::Teacher,
                owner_id: teacher_id,
            }
            .into());
        }

        Ok(subject)
    }
}

fn not_found(id: Uuid) -> AppError {
    ResourceError::NotFound {
        kind: EntityKind::Subject,
        id,
    }
    .into()
}

fn name_and_year_taken(name: String, year: i32) -> AppError {
    ResourceError::NameAndYearTaken {
        kind: EntityKind::Subject,
        name,
        year,
    }
    .into()
}
