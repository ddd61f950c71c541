//! Specialty data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::relation::{Association, RelationRepository},
    model::{
        specialty::{CreateSpecialtyParams, Specialty, UpdateSpecialtyParams},
        summary::GroupSummary,
    },
};

/// Repository providing database operations for specialties.
pub struct SpecialtyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecialtyRepository<'a> {
    /// Creates a new SpecialtyRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new specialty.
    pub async fn create(&self, params: CreateSpecialtyParams) -> Result<Specialty, DbErr> {
        let now = Utc::now();
        let entity = entity::specialty::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            year: ActiveValue::Set(params.year),
            teacher_id: ActiveValue::Set(params.teacher_id),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Specialty::from_entity(entity, Vec::new(), Vec::new()))
    }

    /// Gets a specialty by id with its groups and subjects.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Specialty>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(entity).await?))
    }

    /// Gets the bare specialty row, used for existence and head checks.
    pub async fn find_entity(&self, id: Uuid) -> Result<Option<entity::specialty::Model>, DbErr> {
        entity::prelude::Specialty::find_by_id(id).one(self.db).await
    }

    /// Gets all specialties ordered by name then year.
    pub async fn get_all(&self) -> Result<Vec<Specialty>, DbErr> {
        let entities = entity::prelude::Specialty::find()
            .order_by_asc(entity::specialty::Column::Name)
            .order_by_asc(entity::specialty::Column::Year)
            .all(self.db)
            .await?;

        let mut specialties = Vec::with_capacity(entities.len());
        for entity in entities {
            specialties.push(self.load(entity).await?);
        }

        Ok(specialties)
    }

    /// Checks whether (`name`, `year`) belongs to a specialty other than `exclude`.
    pub async fn name_and_year_taken(
        &self,
        name: &str,
        year: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Specialty::find()
            .filter(entity::specialty::Column::Name.eq(name))
            .filter(entity::specialty::Column::Year.eq(year));
        if let Some(id) = exclude {
            query = query.filter(entity::specialty::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Applies a partial update to a specialty.
    ///
    /// # Returns
    /// - `Ok(Specialty)` - The updated specialty
    /// - `Err(DbErr::RecordNotFound)` - No specialty with this id
    pub async fn update(&self, params: UpdateSpecialtyParams) -> Result<Specialty, DbErr> {
        let entity = self
            .find_entity(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Specialty with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::specialty::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(year) = params.year {
            active_model.year = ActiveValue::Set(year);
        }
        if let Some(teacher_id) = params.teacher_id {
            active_model.teacher_id = ActiveValue::Set(Some(teacher_id));
        }
        active_model.updated_on = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        self.load(entity).await
    }

    /// Deletes a specialty with its subject links, detaching its groups.
    ///
    /// # Returns
    /// - `Ok(true)` - Specialty deleted
    /// - `Ok(false)` - No specialty with this id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SubjectSpecialty::delete_many()
            .filter(entity::subject_specialty::Column::SpecialtyId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Group::update_many()
            .col_expr(
                entity::group::Column::SpecialtyId,
                Expr::value(Option::<Uuid>::None),
            )
            .filter(entity::group::Column::SpecialtyId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Specialty::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn load(&self, entity: entity::specialty::Model) -> Result<Specialty, DbErr> {
        let groups = entity::prelude::Group::find()
            .filter(entity::group::Column::SpecialtyId.eq(entity.id))
            .order_by_asc(entity::group::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(GroupSummary::from_entity)
            .collect();

        let subjects = RelationRepository::new(self.db)
            .item_subjects(Association::SpecialtySubjects, entity.id)
            .await?;

        Ok(Specialty::from_entity(entity, groups, subjects))
    }
}
