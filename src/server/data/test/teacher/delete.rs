use super::*;

/// Tests a hard delete detaches the teacher from specialties, groups and subjects.
///
/// Expected: Ok(true), related records kept with cleared references
#[tokio::test]
async fn detaches_related_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, teacher, subject) = factory::helpers::create_teacher_with_subject(db).await?;
    let specialty = factory::specialty::SpecialtyFactory::new(db)
        .teacher_id(teacher.id)
        .build()
        .await?;
    let group = factory::group::GroupFactory::new(db)
        .curator_id(teacher.id)
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(entity::prelude::Teacher::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::SubjectTeacher::find().all(db).await?.is_empty());
    assert!(entity::prelude::Subject::find_by_id(subject.id)
        .one(db)
        .await?
        .is_some());

    let specialty = entity::prelude::Specialty::find_by_id(specialty.id)
        .one(db)
        .await?
        .unwrap();
    assert!(specialty.teacher_id.is_none());
    let group = entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .unwrap();
    assert!(group.curator_id.is_none());

    Ok(())
}
