//! Factories for association table rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Appoints a subject to a teacher.
pub async fn subject_teacher(
    db: &DatabaseConnection,
    subject_id: Uuid,
    teacher_id: Uuid,
) -> Result<entity::subject_teacher::Model, DbErr> {
    entity::subject_teacher::ActiveModel {
        subject_id: ActiveValue::Set(subject_id),
        teacher_id: ActiveValue::Set(teacher_id),
    }
    .insert(db)
    .await
}

/// Enrolls a student in a group.
pub async fn group_student(
    db: &DatabaseConnection,
    group_id: Uuid,
    student_id: Uuid,
) -> Result<entity::group_student::Model, DbErr> {
    entity::group_student::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        student_id: ActiveValue::Set(student_id),
    }
    .insert(db)
    .await
}

/// Adds a subject to a specialty's curriculum.
pub async fn subject_specialty(
    db: &DatabaseConnection,
    subject_id: Uuid,
    specialty_id: Uuid,
) -> Result<entity::subject_specialty::Model, DbErr> {
    entity::subject_specialty::ActiveModel {
        subject_id: ActiveValue::Set(subject_id),
        specialty_id: ActiveValue::Set(specialty_id),
    }
    .insert(db)
    .await
}

/// Adds a subject to a group.
pub async fn subject_group(
    db: &DatabaseConnection,
    subject_id: Uuid,
    group_id: Uuid,
) -> Result<entity::subject_group::Model, DbErr> {
    entity::subject_group::ActiveModel {
        subject_id: ActiveValue::Set(subject_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}
