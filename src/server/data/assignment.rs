//! Assignment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::assignment::{
    Assignment, CreateAssignmentParams, UpdateAssignmentParams,
};

/// Repository providing database operations for assignments.
pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    /// Creates a new AssignmentRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new assignment in its subject.
    pub async fn create(&self, params: CreateAssignmentParams) -> Result<Assignment, DbErr> {
        let now = Utc::now();
        let entity = entity::assignment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            max_mark: ActiveValue::Set(params.max_mark),
            deadline: ActiveValue::Set(params.deadline),
            subject_id: ActiveValue::Set(params.subject_id),
            created_on: ActiveValue::Set(now),
            updated_on: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Assignment::from_entity(entity))
    }

    /// Gets an assignment only if it belongs to `subject_id`.
    pub async fn find_in_subject(
        &self,
        subject_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Assignment>, DbErr> {
        let entity = entity::prelude::Assignment::find_by_id(id)
            .filter(entity::assignment::Column::SubjectId.eq(subject_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Assignment::from_entity))
    }

    /// Gets all assignments of a subject ordered by name.
    pub async fn get_by_subject(&self, subject_id: Uuid) -> Result<Vec<Assignment>, DbErr> {
        let entities = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::SubjectId.eq(subject_id))
            .order_by_asc(entity::assignment::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Assignment::from_entity).collect())
    }

    /// Checks whether `name` is used by another assignment of the same subject.
    pub async fn name_taken_in_subject(
        &self,
        subject_id: Uuid,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Assignment::find()
            .filter(entity::assignment::Column::SubjectId.eq(subject_id))
            .filter(entity::assignment::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(entity::assignment::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Applies a partial update to an assignment.
    ///
    /// # Returns
    /// - `Ok(Assignment)` - The updated assignment
    /// - `Err(DbErr::RecordNotFound)` - No assignment with this id in the subject
    pub async fn update(&self, params: UpdateAssignmentParams) -> Result<Assignment, DbErr> {
        let entity = entity::prelude::Assignment::find_by_id(params.id)
            .filter(entity::assignment::Column::SubjectId.eq(params.subject_id))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Assignment with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::assignment::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(max_mark) = params.max_mark {
            active_model.max_mark = ActiveValue::Set(max_mark);
        }
        if let Some(deadline) = params.deadline {
            active_model.deadline = ActiveValue::Set(Some(deadline));
        }
        active_model.updated_on = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        Ok(Assignment::from_entity(entity))
    }

    /// Deletes an assignment.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment deleted
    /// - `Ok(false)` - No assignment with this id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Assignment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
