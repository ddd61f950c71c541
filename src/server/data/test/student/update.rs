use super::*;

/// Tests a partial update changes only the supplied fields.
///
/// Expected: Ok with new year and last name, email untouched
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(UpdateStudentParams {
            id: user.id,
            user: UpdateUserParams {
                last_name: Some("Curie".to_string()),
                ..Default::default()
            },
            year_of_study: Some(4),
        })
        .await?;

    assert_eq!(updated.profile.last_name, "Curie");
    assert_eq!(updated.profile.email, user.email);
    assert_eq!(updated.year_of_study, 4);
    assert!(updated.profile.updated_on >= user.updated_on);

    Ok(())
}

/// Tests updating an unknown student.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParams {
            id: uuid::Uuid::new_v4(),
            user: UpdateUserParams::default(),
            year_of_study: Some(3),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
