use super::*;
use crate::server::{
    model::specialty::{CreateSpecialtyParams, UpdateSpecialtyParams},
    service::specialty::SpecialtyService,
};
use test_utils::{factory::specialty::SpecialtyFactory, factory::user::UserFactory};

/// Tests (name, year) uniqueness on create.
///
/// Expected: same name in another year succeeds, same pair fails
#[tokio::test]
async fn create_enforces_name_and_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = SpecialtyService::new(db);
    let params = |year| CreateSpecialtyParams {
        name: "Computer Science".to_string(),
        year,
        teacher_id: None,
    };

    service.create(params(2023)).await?;
    service.create(params(2024)).await?;
    let result = service.create(params(2024)).await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::NameAndYearTaken { year: 2024, .. }))
    ));

    Ok(())
}

/// Tests the head teacher reference checks.
///
/// Expected: UserDoesNotExist for an unknown id, NotActive for a deactivated teacher
#[tokio::test]
async fn create_checks_head_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (inactive, _) = test_utils::factory::teacher::TeacherFactory::new(db)
        .user(|u| u.active(false))
        .build()
        .await?;
    let service = SpecialtyService::new(db);

    let missing = service
        .create(CreateSpecialtyParams {
            name: "Physics".to_string(),
            year: 2024,
            teacher_id: Some(Uuid::new_v4()),
        })
        .await;
    let deactivated = service
        .create(CreateSpecialtyParams {
            name: "Physics".to_string(),
            year: 2024,
            teacher_id: Some(inactive.id),
        })
        .await;

    assert!(matches!(
        missing,
        Err(AppError::ResourceErr(ResourceError::UserDoesNotExist { .. }))
    ));
    assert!(matches!(
        deactivated,
        Err(AppError::ResourceErr(ResourceError::NotActive { .. }))
    ));

    Ok(())
}

/// Tests that a student cannot head a specialty.
///
/// Expected: Err(ResourceError::UserDoesNotExist)
#[tokio::test]
async fn create_rejects_student_as_head() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student = UserFactory::new(db).build().await?;

    let result = SpecialtyService::new(db)
        .create(CreateSpecialtyParams {
            name: "Physics".to_string(),
            year: 2024,
            teacher_id: Some(student.id),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::UserDoesNotExist { .. }))
    ));

    Ok(())
}

/// Tests that changing only the year checks the pair with the current name.
///
/// Expected: Err(ResourceError::NameAndYearTaken)
#[tokio::test]
async fn update_year_checks_current_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    SpecialtyFactory::new(db).name("Math").year(2023).build().await?;
    let target = SpecialtyFactory::new(db).name("Math").year(2024).build().await?;

    let result = SpecialtyService::new(db)
        .update(UpdateSpecialtyParams {
            id: target.id,
            name: None,
            year: Some(2023),
            teacher_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::NameAndYearTaken { .. }))
    ));

    Ok(())
}

/// Tests assigning a head teacher through an update.
///
/// Expected: teacher_id stored
#[tokio::test]
async fn update_sets_head_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let specialty = factory::create_specialty(db).await?;
    let (teacher, _) = factory::create_teacher(db).await?;

    let updated = SpecialtyService::new(db)
        .update(UpdateSpecialtyParams {
            id: specialty.id,
            name: None,
            year: None,
            teacher_id: Some(teacher.id),
        })
        .await?;

    assert_eq!(updated.teacher_id, Some(teacher.id));
    assert_eq!(updated.name, specialty.name);

    Ok(())
}

/// Tests deleting a missing specialty.
///
/// Expected: Err(ResourceError::NotFound)
#[tokio::test]
async fn delete_missing_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SpecialtyService::new(db).delete(Uuid::new_v4()).await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::NotFound { .. }))
    ));

    Ok(())
}
