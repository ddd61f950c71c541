use crate::server::{
    data::group::GroupRepository,
    model::group::{CreateGroupParams, UpdateGroupParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a group loads its specialty summary.
///
/// Expected: Ok with specialty summary and curator id
#[tokio::test]
async fn creates_group_with_specialty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialty = factory::create_specialty(db).await?;
    let (_, teacher) = factory::create_teacher(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParams {
            name: "CS-101".to_string(),
            year: 2024,
            credits_per_student: 60,
            curator_id: Some(teacher.id),
            specialty_id: Some(specialty.id),
        })
        .await?;

    assert_eq!(group.curator_id, Some(teacher.id));
    assert_eq!(group.specialty.unwrap().id, specialty.id);
    assert!(group.students.is_empty());

    Ok(())
}

/// Tests a group is loaded with its students and subjects.
///
/// Expected: one student and one subject summary
#[tokio::test]
async fn finds_group_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let (user, student) = factory::create_student(db).await?;
    let subject = factory::create_subject(db).await?;
    factory::link::group_student(db, group.id, student.id).await?;
    factory::link::subject_group(db, subject.id, group.id).await?;

    let repo = GroupRepository::new(db);
    let found = repo.find_by_id(group.id).await?.unwrap();

    assert_eq!(found.students.len(), 1);
    assert_eq!(found.students[0].email, user.email);
    assert_eq!(found.subjects.len(), 1);
    assert_eq!(found.subjects[0].id, subject.id);

    Ok(())
}

/// Tests a partial update of credits.
///
/// Expected: Ok with new credits and unchanged name
#[tokio::test]
async fn updates_credits_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(UpdateGroupParams {
            id: group.id,
            name: None,
            year: None,
            credits_per_student: Some(90),
            curator_id: None,
            specialty_id: None,
        })
        .await?;

    assert_eq!(updated.credits_per_student, 90);
    assert_eq!(updated.name, group.name);

    Ok(())
}

/// Tests deleting a group removes memberships but keeps students.
///
/// Expected: Ok(true), student kept, links gone
#[tokio::test]
async fn delete_removes_links_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let (_, student) = factory::create_student(db).await?;
    let subject = factory::create_subject(db).await?;
    factory::link::group_student(db, group.id, student.id).await?;
    factory::link::subject_group(db, subject.id, group.id).await?;

    let repo = GroupRepository::new(db);
    assert!(repo.delete(group.id).await?);

    assert!(entity::prelude::GroupStudent::find().all(db).await?.is_empty());
    assert!(entity::prelude::SubjectGroup::find().all(db).await?.is_empty());
    assert!(entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
