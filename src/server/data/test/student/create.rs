use super::*;

/// Tests creating a student writes both the user and the student row.
///
/// Expected: Ok with an active student and no groups
#[tokio::test]
async fn creates_user_and_student_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(create_params("ada@example.com")).await?;

    assert_eq!(student.profile.email, "ada@example.com");
    assert_eq!(student.year_of_study, 2);
    assert!(student.profile.is_active);
    assert!(student.groups.is_empty());

    let user = entity::prelude::User::find_by_id(student.profile.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.role, entity::user::UserRole::Student);
    assert_eq!(user.password, "hashed");
    assert!(entity::prelude::Student::find_by_id(student.profile.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that a duplicate email fails without leaving a partial user.
///
/// Expected: Err and a single user row
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(create_params("ada@example.com")).await?;
    let result = repo.create(create_params("ada@example.com")).await;

    assert!(result.is_err());
    let users = entity::prelude::User::find().all(db).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}
