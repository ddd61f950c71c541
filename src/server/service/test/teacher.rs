use super::*;
use crate::server::{
    data::user::UserRepository,
    model::user::{CreateTeacherParams, CreateUserParams, UpdateTeacherParams, UpdateUserParams},
    service::teacher::TeacherService,
};

fn create_params(position_id: Uuid) -> CreateTeacherParams {
    CreateTeacherParams {
        user: CreateUserParams {
            email: "grace@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            password: "C0bol!rules".to_string(),
            password_confirmation: "C0bol!rules".to_string(),
            age: Some(45),
        },
        position_id,
    }
}

/// Tests teacher registration with an existing position.
///
/// Expected: teacher created with the position summary attached
#[tokio::test]
async fn creates_teacher_with_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let position = factory::create_position(db).await?;

    let teacher = TeacherService::new(db)
        .create(create_params(position.id))
        .await?;

    assert_eq!(teacher.position_id, Some(position.id));
    assert_eq!(
        teacher.position.map(|p| p.position_name),
        Some(position.position_name)
    );

    Ok(())
}

/// Tests teacher registration with an unknown position.
///
/// Expected: Err(ResourceError::ReferenceDoesNotExist) and no user row
#[tokio::test]
async fn create_rejects_unknown_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherService::new(db)
        .create(create_params(Uuid::new_v4()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::ReferenceDoesNotExist { .. }))
    ));
    assert!(UserRepository::new(db)
        .find_by_email("grace@example.com")
        .await?
        .is_none());

    Ok(())
}

/// Tests moving a teacher to a position that does not exist.
///
/// Expected: Err(ResourceError::ReferenceDoesNotExist)
#[tokio::test]
async fn update_rejects_unknown_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _) = factory::create_teacher(db).await?;

    let result = TeacherService::new(db)
        .update(
            &claims_for(user.id),
            UpdateTeacherParams {
                id: user.id,
                user: UpdateUserParams::default(),
                position_id: Some(Uuid::new_v4()),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::ReferenceDoesNotExist { .. }))
    ));

    Ok(())
}

/// Tests soft-deleting another teacher.
///
/// Expected: Err(AuthError::PermissionDenied) and the target stays active
#[tokio::test]
async fn soft_delete_denies_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (target, _) = factory::create_teacher(db).await?;
    let (intruder, _) = factory::create_teacher(db).await?;

    let result = TeacherService::new(db)
        .soft_delete(&claims_for(intruder.id), target.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PermissionDenied(_)))
    ));
    let stored = UserRepository::new(db).find_by_id(target.id).await?.unwrap();
    assert!(stored.is_active);

    Ok(())
}

/// Tests that only active teachers are listed.
///
/// Expected: the deactivated teacher is missing from the list
#[tokio::test]
async fn lists_active_teachers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (active, _) = factory::create_teacher(db).await?;
    let (inactive, _) = factory::create_teacher(db).await?;
    let service = TeacherService::new(db);

    service
        .soft_delete(&claims_for(inactive.id), inactive.id)
        .await?;

    let teachers = service.get_all().await?;
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].profile.id, active.id);

    Ok(())
}
