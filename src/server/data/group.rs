//! Group data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::relation::{Association, RelationRepository},
    model::{
        group::{CreateGroupParams, Group, UpdateGroupParams},
        summary::SpecialtySummary,
    },
};

/// Repository providing database operations for groups.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group.
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let now = Utc::now();
        let entity = entity::group::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            year: ActiveValue::Set(params.year),
            credits_per_student: ActiveValue::Set(params.credits_per_student),
            curator_id: ActiveValue::Set(params.curator_id),
            specialty_id: ActiveValue::Set(params.specialty_id),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.load(entity).await
    }

    /// Gets a group by id with its specialty, students and subjects.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(entity).await?))
    }

    /// Gets the bare group row, used for existence and curator checks.
    pub async fn find_entity(&self, id: Uuid) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find_by_id(id).one(self.db).await
    }

    /// Gets all groups ordered by name then year.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Name)
            .order_by_asc(entity::group::Column::Year)
            .all(self.db)
            .await?;

        let mut groups = Vec::with_capacity(entities.len());
        for entity in entities {
            groups.push(self.load(entity).await?);
        }

        Ok(groups)
    }

    /// Checks whether (`name`, `year`) belongs to a group other than `exclude`.
    pub async fn name_and_year_taken(
        &self,
        name: &str,
        year: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .filter(entity::group::Column::Year.eq(year));
        if let Some(id) = exclude {
            query = query.filter(entity::group::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Applies a partial update to a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The updated group
    /// - `Err(DbErr::RecordNotFound)` - No group with this id
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Group, DbErr> {
        let entity = self
            .find_entity(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Group with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::group::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(year) = params.year {
            active_model.year = ActiveValue::Set(year);
        }
        if let Some(credits) = params.credits_per_student {
            active_model.credits_per_student = ActiveValue::Set(credits);
        }
        if let Some(curator_id) = params.curator_id {
            active_model.curator_id = ActiveValue::Set(Some(curator_id));
        }
        if let Some(specialty_id) = params.specialty_id {
            active_model.specialty_id = ActiveValue::Set(Some(specialty_id));
        }
        active_model.updated_on = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        self.load(entity).await
    }

    /// Deletes a group with its student and subject links.
    ///
    /// # Returns
    /// - `Ok(true)` - Group deleted
    /// - `Ok(false)` - No group with this id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::GroupStudent::delete_many()
            .filter(entity::group_student::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::SubjectGroup::delete_many()
            .filter(entity::subject_group::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Group::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn load(&self, entity: entity::group::Model) -> Result<Group, DbErr> {
        let relations = RelationRepository::new(self.db);

        let specialty = match entity.specialty_id {
            Some(specialty_id) => entity::prelude::Specialty::find_by_id(specialty_id)
                .one(self.db)
                .await?
                .map(SpecialtySummary::from_entity),
            None => None,
        };

        let student_ids = relations
            .item_ids(Association::GroupStudents, entity.id)
            .await?;
        let students = relations.user_summaries(student_ids).await?;
        let subjects = relations
            .item_subjects(Association::GroupSubjects, entity.id)
            .await?;

        Ok(Group::from_entity(entity, specialty, students, subjects))
    }
}
