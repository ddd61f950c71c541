use super::*;

/// Tests existence checks use the student table for group memberships.
///
/// Expected: only the student id is found, the teacher id is not
#[tokio::test]
async fn checks_student_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::create_student(db).await?;
    let (_, teacher) = factory::create_teacher(db).await?;

    let repo = RelationRepository::new(db);
    let found = repo
        .existing_item_ids(Association::GroupStudents, &[student.id, teacher.id])
        .await?;

    assert!(found.contains(&student.id));
    assert!(!found.contains(&teacher.id));

    Ok(())
}

/// Tests existence checks use the subject table for subject associations.
///
/// Expected: only the subject id is found
#[tokio::test]
async fn checks_subject_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_subject(db).await?;
    let missing = Uuid::new_v4();

    let repo = RelationRepository::new(db);
    let found = repo
        .existing_item_ids(Association::SpecialtySubjects, &[subject.id, missing])
        .await?;

    assert_eq!(found.len(), 1);
    assert!(found.contains(&subject.id));

    Ok(())
}
