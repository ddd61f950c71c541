use super::*;

/// Tests moving a teacher to another position.
///
/// Expected: Ok with the new position summary
#[tokio::test]
async fn changes_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::create_position(db).await?;
    let new = factory::position::create_position_named(db, "Dean").await?;
    let (user, _) = factory::create_teacher_with_position(db, old.id).await?;

    let repo = TeacherRepository::new(db);
    let updated = repo
        .update(UpdateTeacherParams {
            id: user.id,
            user: UpdateUserParams {
                age: Some(45),
                ..Default::default()
            },
            position_id: Some(new.id),
        })
        .await?;

    assert_eq!(updated.position_id, Some(new.id));
    assert_eq!(updated.position.unwrap().position_name, "Dean");
    assert_eq!(updated.profile.age, Some(45));

    Ok(())
}
