//! Appointing items to owners and removing them again.
//!
//! Every operation runs as a teacher acting on their own path id. Group and specialty
//! operations additionally require the teacher to curate the group or head the specialty.
//! Appointing is idempotent. Removing fails as a whole when any item is not linked.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        group::GroupRepository,
        relation::{Association, RelationRepository, Unlink},
        specialty::SpecialtyRepository,
        subject::SubjectRepository,
    },
    error::{auth::AuthError, internal::InternalError, resource::ResourceError, AppError},
    model::{
        auth::Claims, group::Group, kind::EntityKind, relation::ItemIds, specialty::Specialty,
        user::Teacher,
    },
    service::{teacher::TeacherService, user::UserService},
    util::message::{appointed, disappointed, format_ids},
};

/// Outcome of an appoint or remove call: the response message and the owner's new state.
#[derive(Debug, Clone)]
pub struct Appointment<T> {
    pub message: String,
    pub owner: T,
}

/// Direction of a membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Appoint,
    Remove,
}

impl Change {
    fn message(self, items: impl std::fmt::Display, owner: impl std::fmt::Display) -> String {
        match self {
            Self::Appoint => appointed(items, owner),
            Self::Remove => disappointed(items, owner),
        }
    }
}

/// Service providing membership changes on the association tables.
pub struct RelationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RelationService<'a> {
    /// Creates a new RelationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appoints one subject to the calling teacher.
    ///
    /// # Returns
    /// - `Ok(Appointment<Teacher>)` - Message and the teacher with their subjects
    /// - `Err(AuthError::PermissionDenied)` - Caller is not the teacher
    /// - `Err(ResourceError::NotFound)` - Subject does not exist
    pub async fn appoint_teacher_subject(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<Appointment<Teacher>, AppError> {
        self.change_teacher_subject(claims, teacher_id, subject_id, Change::Appoint)
            .await
    }

    /// Removes one subject from the calling teacher.
    ///
    /// # Returns
    /// - `Err(ResourceError::NotInCollection)` - Subject is not appointed to the teacher
    pub async fn remove_teacher_subject(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        subject_id: Uuid,
    ) -> Result<Appointment<Teacher>, AppError> {
        self.change_teacher_subject(claims, teacher_id, subject_id, Change::Remove)
            .await
    }

    pub async fn appoint_teacher_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Teacher>, AppError> {
        self.change_teacher_subjects(claims, teacher_id, ids, Change::Appoint)
            .await
    }

    pub async fn remove_teacher_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Teacher>, AppError> {
        self.change_teacher_subjects(claims, teacher_id, ids, Change::Remove)
            .await
    }

    /// Enrolls students in a group curated by the calling teacher.
    pub async fn appoint_group_students(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        group_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Group>, AppError> {
        self.change_group(
            claims,
            teacher_id,
            group_id,
            Association::GroupStudents,
            ids,
            Change::Appoint,
        )
        .await
    }

    pub async fn remove_group_students(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        group_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Group>, AppError> {
        self.change_group(
            claims,
            teacher_id,
            group_id,
            Association::GroupStudents,
            ids,
            Change::Remove,
        )
        .await
    }

    /// Adds subjects to the curriculum of a group curated by the calling teacher.
    pub async fn appoint_group_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        group_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Group>, AppError> {
        self.change_group(
            claims,
            teacher_id,
            group_id,
            Association::GroupSubjects,
            ids,
            Change::Appoint,
        )
        .await
    }

    pub async fn remove_group_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        group_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Group>, AppError> {
        self.change_group(
            claims,
            teacher_id,
            group_id,
            Association::GroupSubjects,
            ids,
            Change::Remove,
        )
        .await
    }

    /// Adds subjects to a specialty headed by the calling teacher.
    pub async fn appoint_specialty_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        specialty_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Specialty>, AppError> {
        self.change_specialty(claims, teacher_id, specialty_id, ids, Change::Appoint)
            .await
    }

    pub async fn remove_specialty_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        specialty_id: Uuid,
        ids: ItemIds,
    ) -> Result<Appointment<Specialty>, AppError> {
        self.change_specialty(claims, teacher_id, specialty_id, ids, Change::Remove)
            .await
    }

    async fn change_teacher_subject(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        subject_id: Uuid,
        change: Change,
    ) -> Result<Appointment<Teacher>, AppError> {
        let teacher = UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;
        let subject = SubjectRepository::new(self.db)
            .find_entity(subject_id)
            .await?
            .ok_or(ResourceError::NotFound {
                kind: EntityKind::Subject,
                id: subject_id,
            })?;

        self.apply(Association::TeacherSubjects, teacher_id, &[subject_id], change)
            .await?;

        Ok(Appointment {
            message: change.message(subject.name, teacher.first_name),
            owner: TeacherService::new(self.db).load(teacher_id).await?,
        })
    }

    async fn change_teacher_subjects(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        ids: ItemIds,
        change: Change,
    ) -> Result<Appointment<Teacher>, AppError> {
        let teacher = UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;
        let assoc = Association::TeacherSubjects;
        self.ensure_items_exist(assoc, &ids.0).await?;

        self.apply(assoc, teacher_id, &ids.0, change).await?;

        Ok(Appointment {
            message: change.message(format_ids(&ids.0), teacher.first_name),
            owner: TeacherService::new(self.db).load(teacher_id).await?,
        })
    }

    async fn change_group(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        group_id: Uuid,
        assoc: Association,
        ids: ItemIds,
        change: Change,
    ) -> Result<Appointment<Group>, AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;

        let repo = GroupRepository::new(self.db);
        let group = repo
            .find_entity(group_id)
            .await?
            .ok_or(ResourceError::NotFound {
                kind: EntityKind::Group,
                id: group_id,
            })?;
        if group.curator_id != Some(teacher_id) {
            return Err(AuthError::PermissionDenied(claims.sub).into());
        }
        self.ensure_items_exist(assoc, &ids.0).await?;

        self.apply(assoc, group_id, &ids.0, change).await?;

        let owner = repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| missing_after_write(EntityKind::Group, group_id))?;

        Ok(Appointment {
            message: change.message(format_ids(&ids.0), group.name),
            owner,
        })
    }

    async fn change_specialty(
        &self,
        claims: &Claims,
        teacher_id: Uuid,
        specialty_id: Uuid,
        ids: ItemIds,
        change: Change,
    ) -> Result<Appointment<Specialty>, AppError> {
        UserService::new(self.db)
            .find_owned(claims, UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;

        let repo = SpecialtyRepository::new(self.db);
        let specialty = repo
            .find_entity(specialty_id)
            .await?
            .ok_or(ResourceError::NotFound {
                kind: EntityKind::Specialty,
                id: specialty_id,
            })?;
        if specialty.teacher_id != Some(teacher_id) {
            return Err(AuthError::PermissionDenied(claims.sub).into());
        }
        let assoc = Association::SpecialtySubjects;
        self.ensure_items_exist(assoc, &ids.0).await?;

        self.apply(assoc, specialty_id, &ids.0, change).await?;

        let owner = repo
            .find_by_id(specialty_id)
            .await?
            .ok_or_else(|| missing_after_write(EntityKind::Specialty, specialty_id))?;

        Ok(Appointment {
            message: change.message(format_ids(&ids.0), specialty.name),
            owner,
        })
    }

    /// Fails with every id of `ids` missing from the item table.
    async fn ensure_items_exist(&self, assoc: Association, ids: &[Uuid]) -> Result<(), AppError> {
        let found = RelationRepository::new(self.db)
            .existing_item_ids(assoc, ids)
            .await?;
        let mut missing: Vec<Uuid> = Vec::new();
        for id in ids {
            if !found.contains(id) && !missing.contains(id) {
                missing.push(*id);
            }
        }

        if !missing.is_empty() {
            return Err(ResourceError::ManyNotFound {
                kind: assoc.item_kind(),
                ids: missing,
            }
            .into());
        }

        Ok(())
    }

    async fn apply(
        &self,
        assoc: Association,
        owner_id: Uuid,
        ids: &[Uuid],
        change: Change,
    ) -> Result<(), AppError> {
        let repo = RelationRepository::new(self.db);

        match change {
            Change::Appoint => {
                let created = repo.link(assoc, owner_id, ids).await?;
                tracing::info!(
                    owner = %assoc.owner_kind(),
                    owner_id = %owner_id,
                    created,
                    "Items appointed"
                );
            }
            Change::Remove => {
                let removed = match repo.unlink(assoc, owner_id, ids).await? {
                    Unlink::Removed(removed) => removed,
                    Unlink::NotLinked(item_id) => {
                        return Err(ResourceError::NotInCollection {
                            item_kind: assoc.item_kind(),
                            item_id,
                            owner_kind: assoc.owner_kind(),
                            owner_id,
                        }
                        .into());
                    }
                };
                tracing::info!(
                    owner = %assoc.owner_kind(),
                    owner_id = %owner_id,
                    removed,
                    "Items removed"
                );
            }
        }

        Ok(())
    }
}

fn missing_after_write(kind: EntityKind, id: Uuid) -> AppError {
    InternalError::MissingAfterWrite {
        kind: kind.to_string(),
        id: id.to_string(),
    }
    .into()
}
