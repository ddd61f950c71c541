use crate::server::{
    data::assignment::AssignmentRepository,
    model::assignment::{CreateAssignmentParams, UpdateAssignmentParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests an assignment is only found through its own subject.
///
/// Expected: Some for the owning subject, None for another
#[tokio::test]
async fn find_in_subject_checks_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_subject(db).await?;
    let other = factory::create_subject(db).await?;
    let assignment = factory::create_assignment(db, subject.id).await?;

    let repo = AssignmentRepository::new(db);
    assert!(repo
        .find_in_subject(subject.id, assignment.id)
        .await?
        .is_some());
    assert!(repo.find_in_subject(other.id, assignment.id).await?.is_none());

    Ok(())
}

/// Tests a subject's assignments are listed by name.
///
/// Expected: alphabetical order, other subjects excluded
#[tokio::test]
async fn lists_by_subject_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_subject(db).await?;
    let other = factory::create_subject(db).await?;
    factory::assignment::create_assignment_named(db, subject.id, "Lab 2").await?;
    factory::assignment::create_assignment_named(db, subject.id, "Lab 1").await?;
    factory::create_assignment(db, other.id).await?;

    let repo = AssignmentRepository::new(db);
    let names: Vec<_> = repo
        .get_by_subject(subject.id)
        .await?
        .into_iter()
        .map(|a| a.name)
        .collect();

    assert_eq!(names, vec!["Lab 1", "Lab 2"]);

    Ok(())
}

/// Tests name uniqueness is scoped to the subject.
///
/// Expected: taken in the same subject only, free for the owner
#[tokio::test]
async fn name_taken_is_scoped_to_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_subject(db).await?;
    let other = factory::create_subject(db).await?;
    let assignment =
        factory::assignment::create_assignment_named(db, subject.id, "Essay").await?;

    let repo = AssignmentRepository::new(db);
    assert!(repo.name_taken_in_subject(subject.id, "Essay", None).await?);
    assert!(!repo.name_taken_in_subject(other.id, "Essay", None).await?);
    assert!(!repo
        .name_taken_in_subject(subject.id, "Essay", Some(assignment.id))
        .await?);

    Ok(())
}

/// Tests creating, updating and deleting an assignment.
///
/// Expected: each step reflects the change
#[tokio::test]
async fn create_update_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_subject(db).await?;
    let deadline = Utc::now() + Duration::days(3);

    let repo = AssignmentRepository::new(db);
    let created = repo
        .create(CreateAssignmentParams {
            subject_id: subject.id,
            name: "Quiz".to_string(),
            max_mark: 20,
            deadline: Some(deadline),
        })
        .await?;
    assert_eq!(created.subject_id, subject.id);

    let updated = repo
        .update(UpdateAssignmentParams {
            id: created.id,
            subject_id: subject.id,
            name: None,
            max_mark: Some(25),
            deadline: None,
        })
        .await?;
    assert_eq!(updated.max_mark, 25);
    assert_eq!(updated.name, "Quiz");

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_in_subject(subject.id, created.id).await?.is_none());

    Ok(())
}
