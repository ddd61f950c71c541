use super::*;

/// Tests finding a student loads the groups they belong to.
///
/// Expected: Ok(Some) with one group summary
#[tokio::test]
async fn returns_student_with_groups() -> Result<(), DbErr> {
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
    let found = repo.find_by_id(user.id).await?.unwrap();

    assert_eq!(found.profile.id, user.id);
    assert_eq!(found.groups.len(), 1);
    assert_eq!(found.groups[0].id, group.id);

    Ok(())
}

/// Tests that inactive students are still returned.
///
/// Expected: Ok(Some) with is_active false
#[tokio::test]
async fn returns_inactive_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::student::StudentFactory::new(db)
        .user(|u| u.active(false))
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_id(user.id).await?.unwrap();

    assert!(!found.profile.is_active);

    Ok(())
}

/// Tests that a teacher id is not returned as a student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_teacher_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_teacher(db).await?;

    let repo = StudentRepository::new(db);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}
