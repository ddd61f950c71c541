//! Specialty management.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::specialty::SpecialtyRepository,
    error::{resource::ResourceError, AppError},
    model::{
        kind::EntityKind,
        specialty::{CreateSpecialtyParams, Specialty, UpdateSpecialtyParams},
    },
    service::user::UserService,
};

/// Service providing business logic for specialties.
pub struct SpecialtyService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SpecialtyService<'a> {
    /// Creates a new SpecialtyService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a specialty.
    ///
    /// # Returns
    /// - `Ok(Specialty)` - The created specialty
    /// - `Err(ResourceError::NameAndYearTaken)` - Another specialty has this name and year
    /// - `Err(ResourceError::UserDoesNotExist | NotActive)` - Head teacher is unusable
    pub async fn create(&self, params: CreateSpecialtyParams) -> Result<Specialty, AppError> {
        let repo = SpecialtyRepository::new(self.db);
        if repo
            .name_and_year_taken(&params.name, params.year, None)
            .await?
        {
            return Err(name_and_year_taken(params.name, params.year));
        }
        if let Some(teacher_id) = params.teacher_id {
            self.ensure_head(teacher_id).await?;
        }

        let specialty = repo.create(params).await?;

        tracing::info!(specialty_id = %specialty.id, "Specialty created");

        Ok(specialty)
    }

    pub async fn get_all(&self) -> Result<Vec<Specialty>, AppError> {
        Ok(SpecialtyRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(ResourceError::NotFound)` - No specialty with this id
    pub async fn get(&self, id: Uuid) -> Result<Specialty, AppError> {
        SpecialtyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies a partial update.
    ///
    /// When either `name` or `year` changes, the resulting pair must stay unique.
    pub async fn update(&self, params: UpdateSpecialtyParams) -> Result<Specialty, AppError> {
        let repo = SpecialtyRepository::new(self.db);
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
        if let Some(teacher_id) = params.teacher_id {
            self.ensure_head(teacher_id).await?;
        }

        let specialty = repo.update(params).await?;

        tracing::info!(specialty_id = %specialty.id, "Specialty updated");

        Ok(specialty)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !SpecialtyRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(specialty_id = %id, "Specialty deleted");

        Ok(())
    }

    async fn ensure_head(&self, teacher_id: Uuid) -> Result<(), AppError> {
        UserService::new(self.db)
            .find_referenced(UserRole::Teacher, EntityKind::Teacher, teacher_id)
            .await?;

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    ResourceError::NotFound {
        kind: EntityKind::Specialty,
        id,
    }
    .into()
}

fn name_and_year_taken(name: String, year: i32) -> AppError {
    ResourceError::NameAndYearTaken {
        kind: EntityKind::Specialty,
        name,
        year,
    }
    .into()
}
