//! Association table repository.
//!
//! This module provides the `RelationRepository` for the four many-to-many link tables
//! (teacher ↔ subject, group ↔ student, specialty ↔ subject, group ↔ subject). Each link
//! is addressed from an *owner* side (the record whose membership is edited) to an
//! *item* side (the records being appointed or removed), described by [`Association`].
//! It also loads the summaries used when serializing a record's relations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::model::{
    kind::EntityKind,
    summary::{GroupSummary, SpecialtySummary, SubjectSummary, UserSummary},
};

/// A many-to-many link, viewed from the owner side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    /// Subjects taught by a teacher.
    TeacherSubjects,
    /// Students enrolled in a group.
    GroupStudents,
    /// Subjects in a specialty's curriculum.
    SpecialtySubjects,
    /// Subjects studied by a group.
    GroupSubjects,
}

impl Association {
    pub fn owner_kind(self) -> EntityKind {
        match self {
            Self::TeacherSubjects => EntityKind::Teacher,
            Self::GroupStudents | Self::GroupSubjects => EntityKind::Group,
            Self::SpecialtySubjects => EntityKind::Specialty,
        }
    }

    pub fn item_kind(self) -> EntityKind {
        match self {
            Self::GroupStudents => EntityKind::Student,
            Self::TeacherSubjects | Self::SpecialtySubjects | Self::GroupSubjects => {
                EntityKind::Subject
            }
        }
    }
}

/// Outcome of [`RelationRepository::unlink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlink {
    /// Number of removed links.
    Removed(u64),
    /// An item that is not linked to the owner.
    NotLinked(Uuid),
}

/// Repository providing database operations for association tables.
pub struct RelationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationRepository<'a> {
    /// Creates a new RelationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ids of items linked to `owner_id`.
    pub async fn item_ids(&self, assoc: Association, owner_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        item_ids(self.db, assoc, owner_id).await
    }

    /// Gets the ids of owners that `item_id` is linked to.
    pub async fn owner_ids(&self, assoc: Association, item_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        use entity::{group_student, subject_group, subject_specialty, subject_teacher};

        let ids = match assoc {
            Association::TeacherSubjects => entity::prelude::SubjectTeacher::find()
                .filter(subject_teacher::Column::SubjectId.eq(item_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.teacher_id)
                .collect(),
            Association::GroupStudents => entity::prelude::GroupStudent::find()
                .filter(group_student::Column::StudentId.eq(item_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.group_id)
                .collect(),
            Association::SpecialtySubjects => entity::prelude::SubjectSpecialty::find()
                .filter(subject_specialty::Column::SubjectId.eq(item_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.specialty_id)
                .collect(),
            Association::GroupSubjects => entity::prelude::SubjectGroup::find()
                .filter(subject_group::Column::SubjectId.eq(item_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.group_id)
                .collect(),
        };

        Ok(ids)
    }

    /// Checks whether a single item is linked to the owner.
    pub async fn is_linked(
        &self,
        assoc: Association,
        owner_id: Uuid,
        item_id: Uuid,
    ) -> Result<bool, DbErr> {
        Ok(item_ids(self.db, assoc, owner_id).await?.contains(&item_id))
    }

    /// Returns which of `ids` exist in the association's item table.
    pub async fn existing_item_ids(
        &self,
        assoc: Association,
        ids: &[Uuid],
    ) -> Result<HashSet<Uuid>, DbErr> {
        let ids = ids.to_vec();
        let found = match assoc.item_kind() {
            EntityKind::Student => entity::prelude::Student::find()
                .filter(entity::student::Column::Id.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.id)
                .collect(),
            _ => entity::prelude::Subject::find()
                .filter(entity::subject::Column::Id.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| m.id)
                .collect(),
        };

        Ok(found)
    }

    /// Links items to the owner, skipping items that are already linked.
    ///
    /// Runs in a single transaction so a failed insert leaves no partial batch.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of newly created links
    /// - `Err(DbErr)` - Database error; nothing was linked
    pub async fn link(
        &self,
        assoc: Association,
        owner_id: Uuid,
        item_ids: &[Uuid],
    ) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let existing: HashSet<Uuid> = self::item_ids(&txn, assoc, owner_id)
            .await?
            .into_iter()
            .collect();
        let mut seen = HashSet::new();
        let mut created = 0;

        for &item_id in item_ids {
            if existing.contains(&item_id) || !seen.insert(item_id) {
                continue;
            }
            insert_link(&txn, assoc, owner_id, item_id).await?;
            created += 1;
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Removes links between the owner and the given items.
    ///
    /// The membership check and the delete share one transaction, so the batch is
    /// removed whole or not at all.
    ///
    /// # Returns
    /// - `Ok(Unlink::Removed(n))` - Every item was linked; `n` links removed
    /// - `Ok(Unlink::NotLinked(id))` - First listed item not linked to the owner; nothing removed
    /// - `Err(DbErr)` - Database error
    pub async fn unlink(
        &self,
        assoc: Association,
        owner_id: Uuid,
        item_ids: &[Uuid],
    ) -> Result<Unlink, DbErr> {
        let txn = self.db.begin().await?;

        let linked = self::item_ids(&txn, assoc, owner_id).await?;
        if let Some(&item_id) = item_ids.iter().find(|id| !linked.contains(id)) {
            txn.rollback().await?;
            return Ok(Unlink::NotLinked(item_id));
        }

        let removed = delete_links(&txn, assoc, owner_id, item_ids).await?;
        txn.commit().await?;

        Ok(Unlink::Removed(removed))
    }

    /// Gets summaries of users with the given ids, ordered by last then first name.
    pub async fn user_summaries(&self, ids: Vec<Uuid>) -> Result<Vec<UserSummary>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserSummary::from_entity)
            .collect())
    }

    /// Gets summaries of subjects with the given ids, ordered by name.
    pub async fn subject_summaries(&self, ids: Vec<Uuid>) -> Result<Vec<SubjectSummary>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(ids))
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(SubjectSummary::from_entity)
            .collect())
    }

    /// Gets summaries of groups with the given ids, ordered by name.
    pub async fn group_summaries(&self, ids: Vec<Uuid>) -> Result<Vec<GroupSummary>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(ids))
            .order_by_asc(entity::group::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(GroupSummary::from_entity)
            .collect())
    }

    /// Gets summaries of specialties with the given ids, ordered by name.
    pub async fn specialty_summaries(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<Vec<SpecialtySummary>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(entity::prelude::Specialty::find()
            .filter(entity::specialty::Column::Id.is_in(ids))
            .order_by_asc(entity::specialty::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(SpecialtySummary::from_entity)
            .collect())
    }

    /// Subjects linked to the owner, as summaries.
    pub async fn item_subjects(
        &self,
        assoc: Association,
        owner_id: Uuid,
    ) -> Result<Vec<SubjectSummary>, DbErr> {
        let ids = self.item_ids(assoc, owner_id).await?;
        self.subject_summaries(ids).await
    }
}

async fn item_ids<C: ConnectionTrait>(
    conn: &C,
    assoc: Association,
    owner_id: Uuid,
) -> Result<Vec<Uuid>, DbErr> {
    use entity::{group_student, subject_group, subject_specialty, subject_teacher};

    let ids = match assoc {
        Association::TeacherSubjects => entity::prelude::SubjectTeacher::find()
            .filter(subject_teacher::Column::TeacherId.eq(owner_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|m| m.subject_id)
            .collect(),
        Association::GroupStudents => entity::prelude::GroupStudent::find()
            .filter(group_student::Column::GroupId.eq(owner_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|m| m.student_id)
            .collect(),
        Association::SpecialtySubjects => entity::prelude::SubjectSpecialty::find()
            .filter(subject_specialty::Column::SpecialtyId.eq(owner_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|m| m.subject_id)
            .collect(),
        Association::GroupSubjects => entity::prelude::SubjectGroup::find()
            .filter(subject_group::Column::GroupId.eq(owner_id))
            .all(conn)
            .await?
            .into_iter()
            .map(|m| m.subject_id)
            .collect(),
    };

    Ok(ids)
}

async fn insert_link<C: ConnectionTrait>(
    conn: &C,
    assoc: Association,
    owner_id: Uuid,
    item_id: Uuid,
) -> Result<(), DbErr> {
    match assoc {
        Association::TeacherSubjects => {
            entity::subject_teacher::ActiveModel {
                subject_id: ActiveValue::Set(item_id),
                teacher_id: ActiveValue::Set(owner_id),
            }
            .insert(conn)
            .await?;
        }
        Association::GroupStudents => {
            entity::group_student::ActiveModel {
                group_id: ActiveValue::Set(owner_id),
                student_id: ActiveValue::Set(item_id),
            }
            .insert(conn)
            .await?;
        }
        Association::SpecialtySubjects => {
            entity::subject_specialty::ActiveModel {
                subject_id: ActiveValue::Set(item_id),
                specialty_id: ActiveValue::Set(owner_id),
            }
            .insert(conn)
            .await?;
        }
        Association::GroupSubjects => {
            entity::subject_group::ActiveModel {
                subject_id: ActiveValue::Set(item_id),
                group_id: ActiveValue::Set(owner_id),
            }
            .insert(conn)
            .await?;
        }
    }

    Ok(())
}

/// Links one subject to a teacher on an existing connection or transaction.
pub(super) async fn link_subject_to_teacher<C: ConnectionTrait>(
    conn: &C,
    teacher_id: Uuid,
    subject_id: Uuid,
) -> Result<(), DbErr> {
    insert_link(conn, Association::TeacherSubjects, teacher_id, subject_id).await
}

async fn delete_links<C: ConnectionTrait>(
    conn: &C,
    assoc: Association,
    owner_id: Uuid,
    item_ids: &[Uuid],
) -> Result<u64, DbErr> {
    use entity::{group_student, subject_group, subject_specialty, subject_teacher};

    let ids = item_ids.to_vec();
    let result = match assoc {
        Association::TeacherSubjects => {
            entity::prelude::SubjectTeacher::delete_many()
                .filter(subject_teacher::Column::TeacherId.eq(owner_id))
                .filter(subject_teacher::Column::SubjectId.is_in(ids))
                .exec(conn)
                .await?
        }
        Association::GroupStudents => {
            entity::prelude::GroupStudent::delete_many()
                .filter(group_student::Column::GroupId.eq(owner_id))
                .filter(group_student::Column::StudentId.is_in(ids))
                .exec(conn)
                .await?
        }
        Association::SpecialtySubjects => {
            entity::prelude::SubjectSpecialty::delete_many()
                .filter(subject_specialty::Column::SpecialtyId.eq(owner_id))
                .filter(subject_specialty::Column::SubjectId.is_in(ids))
                .exec(conn)
                .await?
        }
        Association::GroupSubjects => {
            entity::prelude::SubjectGroup::delete_many()
                .filter(subject_group::Column::GroupId.eq(owner_id))
                .filter(subject_group::Column::SubjectId.is_in(ids))
                .exec(conn)
                .await?
        }
    };

    Ok(result.rows_affected)
}
