use super::*;

/// Tests listing skips soft-deleted students and orders by last name.
///
/// Expected: Ok with the two active students in name order
#[tokio::test]
async fn lists_only_active_students_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .user(|u| u.last_name("Turing"))
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .user(|u| u.last_name("Hopper"))
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .user(|u| u.last_name("Babbage").active(false))
        .build()
        .await?;
    factory::create_teacher(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all_active().await?;

    let names: Vec<_> = students
        .iter()
        .map(|s| s.profile.last_name.as_str())
        .collect();
    assert_eq!(names, vec!["Hopper", "Turing"]);

    Ok(())
}
