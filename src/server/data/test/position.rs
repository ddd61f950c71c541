use crate::server::{
    data::position::PositionRepository,
    model::position::{CreatePositionParams, UpdatePositionParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and reading back a position with its teachers.
///
/// Expected: the position lists the teacher holding it
#[tokio::test]
async fn finds_position_with_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PositionRepository::new(db);
    let position = repo
        .create(CreatePositionParams {
            position_name: "Lecturer".to_string(),
        })
        .await?;
    let (user, _) = factory::create_teacher_with_position(db, position.id).await?;

    let found = repo.find_by_id(position.id).await?.unwrap();

    assert_eq!(found.position_name, "Lecturer");
    assert_eq!(found.teachers.len(), 1);
    assert_eq!(found.teachers[0].id, user.id);
    assert!(repo.exists(position.id).await?);

    Ok(())
}

/// Tests name uniqueness checks ignore the position being updated.
///
/// Expected: taken for others, free for the owner
#[tokio::test]
async fn name_taken_excludes_self() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::position::create_position_named(db, "Dean").await?;

    let repo = PositionRepository::new(db);
    assert!(repo.name_taken("Dean", None).await?);
    assert!(!repo.name_taken("Dean", Some(position.id)).await?);

    Ok(())
}

/// Tests renaming a position.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn renames_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::create_position(db).await?;

    let repo = PositionRepository::new(db);
    let updated = repo
        .update(UpdatePositionParams {
            id: position.id,
            position_name: Some("Assistant".to_string()),
        })
        .await?;

    assert_eq!(updated.position_name, "Assistant");

    Ok(())
}

/// Tests deleting a position clears it from its teachers.
///
/// Expected: Ok(true) and the teacher's position_id is null
#[tokio::test]
async fn delete_clears_teacher_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::create_position(db).await?;
    let (_, teacher) = factory::create_teacher_with_position(db, position.id).await?;

    let repo = PositionRepository::new(db);
    assert!(repo.delete(position.id).await?);
    assert!(!repo.delete(position.id).await?);

    let teacher = entity::prelude::Teacher::find_by_id(teacher.id)
        .one(db)
        .await?
        .unwrap();
    assert!(teacher.position_id.is_none());

    Ok(())
}

/// Tests positions are listed by name.
///
/// Expected: alphabetical order
#[tokio::test]
async fn lists_positions_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::position::create_position_named(db, "Professor").await?;
    factory::position::create_position_named(db, "Assistant").await?;

    let repo = PositionRepository::new(db);
    let names: Vec<_> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.position_name)
        .collect();

    assert_eq!(names, vec!["Assistant", "Professor"]);

    Ok(())
}
