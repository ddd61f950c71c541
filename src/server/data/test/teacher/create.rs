use super::*;

/// Tests creating a teacher stores the position and loads its summary.
///
/// Expected: Ok with position summary and teacher role
#[tokio::test]
async fn creates_teacher_with_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::position::create_position_named(db, "Professor").await?;

    let repo = TeacherRepository::new(db);
    let teacher = repo
        .create(CreateTeacherParams {
            user: CreateUserParams {
                email: "grace@example.com".to_string(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                password: "hashed".to_string(),
                password_confirmation: "hashed".to_string(),
                age: None,
            },
            position_id: position.id,
        })
        .await?;

    assert_eq!(teacher.position_id, Some(position.id));
    assert_eq!(teacher.position.unwrap().position_name, "Professor");
    assert!(teacher.subjects.is_empty());

    let user = entity::prelude::User::find_by_id(teacher.profile.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.role, entity::user::UserRole::Teacher);

    Ok(())
}
