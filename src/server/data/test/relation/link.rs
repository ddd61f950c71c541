use super::*;

/// Tests linking students to a group.
///
/// Expected: Ok(2) and both students listed as items
#[tokio::test]
async fn links_students_to_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let (_, first) = factory::create_student(db).await?;
    let (_, second) = factory::create_student(db).await?;

    let repo = RelationRepository::new(db);
    let created = repo
        .link(Association::GroupStudents, group.id, &[first.id, second.id])
        .await?;

    assert_eq!(created, 2);
    let mut ids = repo.item_ids(Association::GroupStudents, group.id).await?;
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that linking twice, or with duplicates in the batch, keeps one link.
///
/// Expected: second call creates nothing, one row remains
#[tokio::test]
async fn skips_existing_and_duplicate_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::create_teacher(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = RelationRepository::new(db);
    let first = repo
        .link(
            Association::TeacherSubjects,
            teacher.id,
            &[subject.id, subject.id],
        )
        .await?;
    let second = repo
        .link(Association::TeacherSubjects, teacher.id, &[subject.id])
        .await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(entity::prelude::SubjectTeacher::find().all(db).await?.len(), 1);
    assert!(repo
        .is_linked(Association::TeacherSubjects, teacher.id, subject.id)
        .await?);

    Ok(())
}

/// Tests that a batch with an unknown item id rolls back entirely.
///
/// Expected: Err and no link rows
#[tokio::test]
async fn rolls_back_on_failed_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialty = factory::create_specialty(db).await?;
    let subject = factory::create_subject(db).await?;

    let repo = RelationRepository::new(db);
    let result = repo
        .link(
            Association::SpecialtySubjects,
            specialty.id,
            &[subject.id, Uuid::new_v4()],
        )
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::SubjectSpecialty::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
