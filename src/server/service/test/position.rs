use super::*;
use crate::server::{
    model::position::{CreatePositionParams, UpdatePositionParams},
    service::position::PositionService,
};

/// Tests that position names are unique on create.
///
/// Expected: Err(ResourceError::AlreadyExists) for the second "Professor"
#[tokio::test]
async fn create_rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = PositionService::new(db);

    service
        .create(CreatePositionParams {
            position_name: "Professor".to_string(),
        })
        .await?;
    let result = service
        .create(CreatePositionParams {
            position_name: "Professor".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::AlreadyExists { value, .. })) if value == "Professor"
    ));

    Ok(())
}

/// Tests renaming a position to its own current name.
///
/// Expected: Ok, the position does not collide with itself
#[tokio::test]
async fn update_allows_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let position = factory::create_position(db).await?;

    let updated = PositionService::new(db)
        .update(UpdatePositionParams {
            id: position.id,
            position_name: Some(position.position_name.clone()),
        })
        .await?;

    assert_eq!(updated.position_name, position.position_name);

    Ok(())
}

/// Tests renaming a position to another position's name.
///
/// Expected: Err(ResourceError::AlreadyExists)
#[tokio::test]
async fn update_rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_position(db).await?;
    let second = factory::create_position(db).await?;

    let result = PositionService::new(db)
        .update(UpdatePositionParams {
            id: second.id,
            position_name: Some(first.position_name),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::AlreadyExists { .. }))
    ));

    Ok(())
}

/// Tests reading, updating and deleting a missing position.
///
/// Expected: Err(ResourceError::NotFound) from each operation
#[tokio::test]
async fn missing_position_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = PositionService::new(db);
    let id = Uuid::new_v4();

    let get = service.get(id).await;
    let update = service
        .update(UpdatePositionParams {
            id,
            position_name: Some("Dean".to_string()),
        })
        .await;
    let delete = service.delete(id).await;

    for result in [get.map(|_| ()), update.map(|_| ()), delete] {
        assert!(matches!(
            result,
            Err(AppError::ResourceErr(ResourceError::NotFound { .. }))
        ));
    }

    Ok(())
}

/// Tests that deleting a position keeps the teachers holding it.
///
/// Expected: teacher still listed with no position
#[tokio::test]
async fn delete_detaches_teachers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let position = factory::create_position(db).await?;
    let (user, _) = factory::create_teacher_with_position(db, position.id).await?;

    PositionService::new(db).delete(position.id).await?;

    let teacher = crate::server::service::teacher::TeacherService::new(db)
        .get(user.id)
        .await?;
    assert_eq!(teacher.position_id, None);

    Ok(())
}
