//! Group management.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{group::GroupRepository, specialty::SpecialtyRepository},
    error::{resource::ResourceError, AppError},
    model::{
        group::{CreateGroupParams, Group, UpdateGroupParams},
        kind::EntityKind,
    },
    service::user::UserService,
};

/// Service providing business logic for groups.
pub struct GroupService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(ResourceError::NameAndYearTaken)` - Another group has this name and year
    /// - `Err(ResourceError::UserDoesNotExist | NotActive)` - Curator is unusable
    /// - `Err(ResourceError::ReferenceDoesNotExist)` - Unknown specialty
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);
        if repo
            .name_and_year_taken(&params.name, params.year, None)
            .await?
        {
            return Err(name_and_year_taken(params.name, params.year));
        }
        self.ensure_references(params.curator_id, params.specialty_id)
            .await?;

        let group = repo.create(params).await?;

        tracing::info!(group_id = %group.id, "Group created");

        Ok(group)
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(ResourceError::NotFound)` - No group with this id
    pub async fn get(&self, id: Uuid) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies a partial update.
    ///
    /// When either `name` or `year` changes, the resulting pair must stay unique.
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);
        let current = repo
            .find_entity(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

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
        self.ensure_references(params.curator_id, params.specialty_id)
            .await?;

        let group = repo.update(params).await?;

        tracing::info!(group_id = %group.id, "Group updated");

        Ok(group)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !GroupRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(group_id = %id, "Group deleted");

        Ok(())
    }

    async fn ensure_references(
        &self,
        curator_id: Option<Uuid>,
        specialty_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        if let Some(curator_id) = curator_id {
            UserService::new(self.db)
                .find_referenced(UserRole::Teacher, EntityKind::Curator, curator_id)
                .await?;
        }
        if let Some(specialty_id) = specialty_id {
            if SpecialtyRepository::new(self.db)
                .find_entity(specialty_id)
                .await?
                .is_none()
            {
                return Err(ResourceError::ReferenceDoesNotExist {
                    kind: EntityKind::Specialty,
                    id: specialty_id,
                }
                .into());
            }
        }

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    ResourceError::NotFound {
        kind: EntityKind::Group,
        id,
    }
    .into()
}

fn name_and_year_taken(name: String, year: i32) -> AppError {
    ResourceError::NameAndYearTaken {
        kind: EntityKind::Group,
        name,
        year,
    }
    .into()
}
