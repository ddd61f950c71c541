//! Student data repository for database operations.
//!
//! A student is a `user` row with role `student` plus a `student` row holding the year of
//! study. Writes that touch both tables run in a single transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::{
        relation::{Association, RelationRepository},
        user::{delete_user, insert_user, update_user},
    },
    model::user::{CreateStudentParams, Student, UpdateStudentParams, UserProfile},
};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the user and student rows in one transaction.
    ///
    /// # Arguments
    /// - `params` - Validated student data with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with no groups
    /// - `Err(DbErr)` - Database error; neither row was written
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let txn = self.db.begin().await?;

        let user = insert_user(&txn, params.user, entity::user::UserRole::Student).await?;
        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(user.id),
            year_of_study: ActiveValue::Set(params.year_of_study),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Student {
            profile: UserProfile::from_entity(user),
            year_of_study: student.year_of_study,
            groups: Vec::new(),
        })
    }

    /// Gets a student by id, active or not, with the groups they belong to.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, DbErr> {
        let Some((student, Some(user))) = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.load(student, user).await?))
    }

    /// Gets every active student ordered by last then first name.
    pub async fn get_all_active(&self) -> Result<Vec<Student>, DbErr> {
        let rows = entity::prelude::Student::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        let mut students = Vec::with_capacity(rows.len());
        for (student, user) in rows {
            if let Some(user) = user {
                students.push(self.load(student, user).await?);
            }
        }

        Ok(students)
    }

    /// Applies a partial update to the user and student rows in one transaction.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(DbErr::RecordNotFound)` - No student with this id
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let txn = self.db.begin().await?;

        let user = update_user(&txn, params.id, params.user).await?;
        let student = entity::prelude::Student::find_by_id(params.id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                params.id
            )))?;

        let student = match params.year_of_study {
            Some(year) => {
                let mut active_model: entity::student::ActiveModel = student.into();
                active_model.year_of_study = ActiveValue::Set(year);
                active_model.update(&txn).await?
            }
            None => student,
        };

        txn.commit().await?;

        self.load(student, user).await
    }

    /// Permanently deletes a student with their group memberships.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No user with this id existed
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::GroupStudent::delete_many()
            .filter(entity::group_student::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Student::delete_by_id(id).exec(&txn).await?;
        let deleted = delete_user(&txn, id).await?;

        txn.commit().await?;

        Ok(deleted > 0)
    }

    async fn load(
        &self,
        student: entity::student::Model,
        user: entity::user::Model,
    ) -> Result<Student, DbErr> {
        let relations = RelationRepository::new(self.db);
        let group_ids = relations
            .owner_ids(Association::GroupStudents, student.id)
            .await?;

        Ok(Student {
            profile: UserProfile::from_entity(user),
            year_of_study: student.year_of_study,
            groups: relations.group_summaries(group_ids).await?,
        })
    }
}
