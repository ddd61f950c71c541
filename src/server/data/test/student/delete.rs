use super::*;

/// Tests a hard delete removes the user, the student row and group memberships.
///
/// Expected: Ok(true) and no remaining rows
#[tokio::test]
async fn removes_student_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, student) = factory::create_student(db).await?;
    let group = factory::create_group(db).await?;
    factory::link::group_student(db, group.id, student.id).await?;

    let repo = StudentRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Student::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::GroupStudent::find().all(db).await?.is_empty());
    assert!(entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an unknown id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    assert!(!repo.delete(uuid::Uuid::new_v4()).await?);

    Ok(())
}
