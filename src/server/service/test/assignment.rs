use super::*;
use chrono::Utc;

use crate::server::{
    model::assignment::{CreateAssignmentParams, UpdateAssignmentParams},
    service::assignment::AssignmentService,
};
use test_utils::factory::{assignment::create_assignment_named, helpers::create_teacher_with_subject};

fn create_params(subject_id: Uuid, name: &str) -> CreateAssignmentParams {
    CreateAssignmentParams {
        subject_id,
        name: name.to_string(),
        max_mark: 50,
        deadline: Some(Utc::now() + Duration::days(3)),
    }
}

/// Tests creating an assignment in a subject the teacher teaches.
///
/// Expected: assignment listed under the subject
#[tokio::test]
async fn creates_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, subject) = create_teacher_with_subject(db).await?;
    let service = AssignmentService::new(db);

    let created = service
        .create(&claims_for(user.id), user.id, create_params(subject.id, "Homework 1"))
        .await?;

    let listed = service.get_all(subject.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(created.max_mark, 50);

    Ok(())
}

/// Tests creating an assignment in a subject the teacher does not teach.
///
/// Expected: Err(AuthError::PermissionDenied)
#[tokio::test]
async fn create_requires_appointed_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_teacher(db).await?;
    let subject = factory::create_subject(db).await?;

    let result = AssignmentService::new(db)
        .create(&claims_for(user.id), user.id, create_params(subject.id, "Homework 1"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PermissionDenied(_)))
    ));

    Ok(())
}

/// Tests assignment name uniqueness inside one subject.
///
/// Expected: duplicate rejected in the same subject, allowed in another
#[tokio::test]
async fn names_are_unique_per_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, teacher, subject) = create_teacher_with_subject(db).await?;
    let other = factory::create_subject(db).await?;
    test_utils::factory::link::subject_teacher(db, other.id, teacher.id).await?;
    create_assignment_named(db, subject.id, "Quiz").await?;
    let service = AssignmentService::new(db);
    let claims = claims_for(user.id);

    let duplicate = service
        .create(&claims, user.id, create_params(subject.id, "Quiz"))
        .await;
    let elsewhere = service
        .create(&claims, user.id, create_params(other.id, "Quiz"))
        .await;

    assert!(matches!(
        duplicate,
        Err(AppError::ResourceErr(ResourceError::AlreadyExists { .. }))
    ));
    assert!(elsewhere.is_ok());

    Ok(())
}

/// Tests renaming an assignment onto a sibling's name.
///
/// Expected: Err(ResourceError::AlreadyExists), own name accepted
#[tokio::test]
async fn update_checks_name_excluding_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, subject) = create_teacher_with_subject(db).await?;
    create_assignment_named(db, subject.id, "Quiz").await?;
    let target = create_assignment_named(db, subject.id, "Essay").await?;
    let service = AssignmentService::new(db);
    let claims = claims_for(user.id);
    let rename = |name: &str| UpdateAssignmentParams {
        id: target.id,
        subject_id: subject.id,
        name: Some(name.to_string()),
        max_mark: None,
        deadline: None,
    };

    let own = service.update(&claims, user.id, rename("Essay")).await?;
    let taken = service.update(&claims, user.id, rename("Quiz")).await;

    assert_eq!(own.name, "Essay");
    assert!(matches!(
        taken,
        Err(AppError::ResourceErr(ResourceError::AlreadyExists { .. }))
    ));

    Ok(())
}

/// Tests reading an assignment through the wrong subject.
///
/// Expected: Err(ResourceError::NotInCollection)
#[tokio::test]
async fn get_requires_matching_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let subject = factory::create_subject(db).await?;
    let other = factory::create_subject(db).await?;
    let assignment = factory::create_assignment(db, subject.id).await?;
    let service = AssignmentService::new(db);

    assert!(service.get(subject.id, assignment.id).await.is_ok());
    assert!(matches!(
        service.get(other.id, assignment.id).await,
        Err(AppError::ResourceErr(ResourceError::NotInCollection { .. }))
    ));

    Ok(())
}

/// Tests listing assignments of a missing subject.
///
/// Expected: Err(ResourceError::NotFound)
#[tokio::test]
async fn list_requires_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssignmentService::new(db).get_all(Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::NotFound { .. }))
    ));

    Ok(())
}

/// Tests deleting an assignment.
///
/// Expected: assignment gone from the subject
#[tokio::test]
async fn deletes_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, subject) = create_teacher_with_subject(db).await?;
    let assignment = factory::create_assignment(db, subject.id).await?;
    let service = AssignmentService::new(db);

    service
        .delete(&claims_for(user.id), user.id, subject.id, assignment.id)
        .await?;

    assert!(service.get_all(subject.id).await?.is_empty());

    Ok(())
}
