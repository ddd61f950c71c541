//! Teacher data repository for database operations.
//!
//! A teacher is a `user` row with role `teacher` plus a `teacher` row referencing their
//! position. Loading a teacher also gathers the subjects they teach and the specialties
//! they head.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::{
        relation::{Association, RelationRepository},
        user::{delete_user, insert_user, update_user},
    },
    model::{
        summary::{PositionSummary, SpecialtySummary},
        user::{CreateTeacherParams, Teacher, UpdateTeacherParams, UserProfile},
    },
};

/// Repository providing database operations for teachers.
pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    /// Creates a new TeacherRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the user and teacher rows in one transaction.
    ///
    /// # Arguments
    /// - `params` - Validated teacher data with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created teacher with position loaded
    /// - `Err(DbErr)` - Database error; neither row was written
    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, DbErr> {
        let txn = self.db.begin().await?;

        let user = insert_user(&txn, params.user, entity::user::UserRole::Teacher).await?;
        let teacher = entity::teacher::ActiveModel {
            id: ActiveValue::Set(user.id),
            position_id: ActiveValue::Set(Some(params.position_id)),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        self.load(teacher, user).await
    }

    /// Gets a teacher by id, active or not.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Teacher>, DbErr> {
        let Some((teacher, Some(user))) = entity::prelude::Teacher::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.load(teacher, user).await?))
    }

    /// Gets every active teacher ordered by last then first name.
    pub async fn get_all_active(&self) -> Result<Vec<Teacher>, DbErr> {
        let rows = entity::prelude::Teacher::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        let mut teachers = Vec::with_capacity(rows.len());
        for (teacher, user) in rows {
            if let Some(user) = user {
                teachers.push(self.load(teacher, user).await?);
            }
        }

        Ok(teachers)
    }

    /// Applies a partial update to the user and teacher rows in one transaction.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The updated teacher
    /// - `Err(DbErr::RecordNotFound)` - No teacher with this id
    pub async fn update(&self, params: UpdateTeacherParams) -> Result<Teacher, DbErr> {
        let txn = self.db.begin().await?;

        let user = update_user(&txn, params.id, params.user).await?;
        let teacher = entity::prelude::Teacher::find_by_id(params.id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Teacher with id {} not found",
                params.id
            )))?;

        let teacher = match params.position_id {
            Some(position_id) => {
                let mut active_model: entity::teacher::ActiveModel = teacher.into();
                active_model.position_id = ActiveValue::Set(Some(position_id));
                active_model.update(&txn).await?
            }
            None => teacher,
        };

        txn.commit().await?;

        self.load(teacher, user).await
    }

    /// Permanently deletes a teacher.
    ///
    /// Removes their subject links and clears them as specialty head and group curator
    /// before deleting the rows, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Teacher deleted
    /// - `Ok(false)` - No user with this id existed
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SubjectTeacher::delete_many()
            .filter(entity::subject_teacher::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Specialty::update_many()
            .col_expr(
                entity::specialty::Column::TeacherId,
                Expr::value(Option::<Uuid>::None),
            )
            .filter(entity::specialty::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Group::update_many()
            .col_expr(
                entity::group::Column::CuratorId,
                Expr::value(Option::<Uuid>::None),
            )
            .filter(entity::group::Column::CuratorId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Teacher::delete_by_id(id).exec(&txn).await?;
        let deleted = delete_user(&txn, id).await?;

        txn.commit().await?;

        Ok(deleted > 0)
    }

    async fn load(
        &self,
        teacher: entity::teacher::Model,
        user: entity::user::Model,
    ) -> Result<Teacher, DbErr> {
        let relations = RelationRepository::new(self.db);

        let position = match teacher.position_id {
            Some(position_id) => entity::prelude::Position::find_by_id(position_id)
                .one(self.db)
                .await?
                .map(PositionSummary::from_entity),
            None => None,
        };

        let specialties = entity::prelude::Specialty::find()
            .filter(entity::specialty::Column::TeacherId.eq(teacher.id))
            .order_by_asc(entity::specialty::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(SpecialtySummary::from_entity)
            .collect();

        Ok(Teacher {
            profile: UserProfile::from_entity(user),
            position_id: teacher.position_id,
            position,
            subjects: relations
                .item_subjects(Association::TeacherSubjects, teacher.id)
                .await?,
            specialties,
        })
    }
}
