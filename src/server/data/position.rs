//! Position data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::{
    position::{CreatePositionParams, Position, UpdatePositionParams},
    summary::UserSummary,
};

/// Repository providing database operations for positions.
pub struct PositionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionRepository<'a> {
    /// Creates a new PositionRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new position.
    pub async fn create(&self, params: CreatePositionParams) -> Result<Position, DbErr> {
        let now = Utc::now();
        let entity = entity::position::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            position_name: ActiveValue::Set(params.position_name),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Position::from_entity(entity, Vec::new()))
    }

    /// Gets a position by id with the teachers holding it.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Position>, DbErr> {
        let Some(entity) = entity::prelude::Position::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(entity).await?))
    }

    /// Checks whether a position exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        Ok(entity::prelude::Position::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets all positions ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Position>, DbErr> {
        let entities = entity::prelude::Position::find()
            .order_by_asc(entity::position::Column::PositionName)
            .all(self.db)
            .await?;

        let mut positions = Vec::with_capacity(entities.len());
        for entity in entities {
            positions.push(self.load(entity).await?);
        }

        Ok(positions)
    }

    /// Checks whether `name` belongs to a position other than `exclude`.
    pub async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Position::find()
            .filter(entity::position::Column::PositionName.eq(name));
        if let Some(id) = exclude {
            query = query.filter(entity::position::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Applies a partial update to a position.
    ///
    /// # Returns
    /// - `Ok(Position)` - The updated position
    /// - `Err(DbErr::RecordNotFound)` - No position with this id
    pub async fn update(&self, params: UpdatePositionParams) -> Result<Position, DbErr> {
        let entity = entity::prelude::Position::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Position with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::position::ActiveModel = entity.into();
        if let Some(name) = params.position_name {
            active_model.position_name = ActiveValue::Set(name);
        }
        active_model.updated_on = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        self.load(entity).await
    }

    /// Deletes a position, clearing it from every teacher that held it.
    ///
    /// # Returns
    /// - `Ok(true)` - Position deleted
    /// - `Ok(false)` - No position with this id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Teacher::update_many()
            .col_expr(
                entity::teacher::Column::PositionId,
                Expr::value(Option::<Uuid>::None),
            )
            .filter(entity::teacher::Column::PositionId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Position::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn load(&self, entity: entity::position::Model) -> Result<Position, DbErr> {
        let teachers = entity::prelude::Teacher::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::teacher::Column::PositionId.eq(entity.id))
            .order_by_asc(entity::user::Column::LastName)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, user)| user.map(UserSummary::from_entity))
            .collect();

        Ok(Position::from_entity(entity, teachers))
    }
}
