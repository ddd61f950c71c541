//! Position management.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::position::PositionRepository,
    error::{resource::ResourceError, AppError},
    model::{
        kind::EntityKind,
        position::{CreatePositionParams, Position, UpdatePositionParams},
    },
};

/// Service providing business logic for positions.
pub struct PositionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PositionService<'a> {
    /// Creates a new PositionService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a position with a unique name.
    ///
    /// # Returns
    /// - `Ok(Position)` - The created position
    /// - `Err(ResourceError::AlreadyExists)` - Name already used
    pub async fn create(&self, params: CreatePositionParams) -> Result<Position, AppError> {
        let repo = PositionRepository::new(self.db);
        self.ensure_name_free(&repo, &params.position_name, None)
            .await?;

        let position = repo.create(params).await?;

        tracing::info!(position_id = %position.id, "Position created");

        Ok(position)
    }

    pub async fn get_all(&self) -> Result<Vec<Position>, AppError> {
        Ok(PositionRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(ResourceError::NotFound)` - No position with this id
    pub async fn get(&self, id: Uuid) -> Result<Position, AppError> {
        PositionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Renames a position, keeping names unique.
    pub async fn update(&self, params: UpdatePositionParams) -> Result<Position, AppError> {
        let repo = PositionRepository::new(self.db);
        if !repo.exists(params.id).await? {
            return Err(not_found(params.id));
        }
        if let Some(name) = &params.position_name {
            self.ensure_name_free(&repo, name, Some(params.id)).await?;
        }

        let position = repo.update(params).await?;

        tracing::info!(position_id = %position.id, "Position updated");

        Ok(position)
    }

    /// Deletes a position; teachers holding it are left without one.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !PositionRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(position_id = %id, "Position deleted");

        Ok(())
    }

    async fn ensure_name_free(
        &self,
        repo: &PositionRepository<'_>,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), AppError> {
        if repo.name_taken(name, exclude).await? {
            return Err(ResourceError::AlreadyExists {
                kind: EntityKind::Position,
                value: name.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    ResourceError::NotFound {
        kind: EntityKind::Position,
        id,
    }
    .into()
}
