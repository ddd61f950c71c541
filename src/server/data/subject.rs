//! Subject data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::relation::{link_subject_to_teacher, Association, RelationRepository},
    model::subject::{CreateSubjectParams, Subject, UpdateSubjectParams},
};

/// Repository providing database operations for subjects.
pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    /// Creates a new SubjectRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subject and appoints it to `teacher_id` in one transaction.
    pub async fn create_for_teacher(
        &self,
        teacher_id: Uuid,
        params: CreateSubjectParams,
    ) -> Result<Subject, DbErr> {
        let txn = self.db.begin().await?;

        let entity = insert_subject(&txn, params).await?;
        link_subject_to_teacher(&txn, teacher_id, entity.id).await?;

        txn.commit().await?;

        self.load(entity).await
    }

    /// Gets a subject by id with its teachers, specialties and groups.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Subject>, DbErr> {
        let Some(entity) = self.find_entity(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load(entity).await?))
    }

    /// Gets the bare subject row.
    pub async fn find_entity(&self, id: Uuid) -> Result<Option<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find_by_id(id).one(self.db).await
    }

    /// Gets all subjects ordered by name then year.
    pub async fn get_all(&self) -> Result<Vec<Subject>, DbErr> {
        let entities = entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::Name)
            .order_by_asc(entity::subject::Column::Year)
            .all(self.db)
            .await?;

        self.load_many(entities).await
    }

    /// Gets the subjects appointed to a teacher ordered by name.
    pub async fn get_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Subject>, DbErr> {
        let ids = RelationRepository::new(self.db)
            .item_ids(Association::TeacherSubjects, teacher_id)
            .await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(ids))
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await?;

        self.load_many(entities).await
    }

    /// Checks whether (`name`, `year`) belongs to a subject other than `exclude`.
    pub async fn name_and_year_taken(
        &self,
        name: &str,
        year: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Subject::find()
            .filter(entity::subject::Column::Name.eq(name))
            .filter(entity::subject::Column::Year.eq(year));
        if let Some(id) = exclude {
            query = query.filter(entity::subject::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Applies a partial update to a subject.
    ///
    /// # Returns
    /// - `Ok(Subject)` - The updated subject
    /// - `Err(DbErr::RecordNotFound)` - No subject with this id
    pub async fn update(&self, params: UpdateSubjectParams) -> Result<Subject, DbErr> {
        let entity = self
            .find_entity(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Subject with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::subject::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(year) = params.year {
            active_model.year = ActiveValue::Set(year);
        }
        if let Some(credits) = params.credits {
            active_model.credits = ActiveValue::Set(credits);
        }
        active_model.updated_on = ActiveValue::Set(Utc::now());
        let entity = active_model.update(self.db).await?;

        self.load(entity).await
    }

    /// Deletes a subject together with its links and assignments.
    ///
    /// # Returns
    /// - `Ok(true)` - Subject deleted
    /// - `Ok(false)` - No subject with this id
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SubjectTeacher::delete_many()
            .filter(entity::subject_teacher::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::SubjectSpecialty::delete_many()
            .filter(entity::subject_specialty::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::SubjectGroup::delete_many()
            .filter(entity::subject_group::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Assignment::delete_many()
            .filter(entity::assignment::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Subject::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_many(&self, entities: Vec<entity::subject::Model>) -> Result<Vec<Subject>, DbErr> {
        let mut subjects = Vec::with_capacity(entities.len());
        for entity in entities {
            subjects.push(self.load(entity).await?);
        }

        Ok(subjects)
    }

    async fn load(&self, entity: entity::subject::Model) -> Result<Subject, DbErr> {
        let relations = RelationRepository::new(self.db);

        let teacher_ids = relations
            .owner_ids(Association::TeacherSubjects, entity.id)
            .await?;
        let specialty_ids = relations
            .owner_ids(Association::SpecialtySubjects, entity.id)
            .await?;
        let group_ids = relations
            .owner_ids(Association::GroupSubjects, entity.id)
            .await?;

        let teachers = relations.user_summaries(teacher_ids).await?;
        let specialties = relations.specialty_summaries(specialty_ids).await?;
        let groups = relations.group_summaries(group_ids).await?;

        Ok(Subject::from_entity(entity, teachers, specialties, groups))
    }
}

async fn insert_subject<C: ConnectionTrait>(
    conn: &C,
    params: CreateSubjectParams,
) -> Result<entity::subject::Model, DbErr> {
    let now = Utc::now();
    entity::subject::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(params.name),
        year: ActiveValue::Set(params.year),
        credits: ActiveValue::Set(params.credits),
        created_on: ActiveValue::Set(now),
        updated_on: ActiveValue::Set(now),
    }
    .insert(conn)
    .await
}
