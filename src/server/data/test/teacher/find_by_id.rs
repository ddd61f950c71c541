use super::*;

/// Tests a teacher is loaded with taught subjects and headed specialties.
///
/// Expected: Ok(Some) with one subject and one specialty summary
#[tokio::test]
async fn returns_teacher_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, teacher, subject) = factory::helpers::create_teacher_with_subject(db).await?;
    let specialty = factory::specialty::SpecialtyFactory::new(db)
        .teacher_id(teacher.id)
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    let found = repo.find_by_id(user.id).await?.unwrap();

    assert!(found.position.is_none());
    assert_eq!(found.subjects.len(), 1);
    assert_eq!(found.subjects[0].id, subject.id);
    assert_eq!(found.specialties.len(), 1);
    assert_eq!(found.specialties[0].id, specialty.id);

    Ok(())
}

/// Tests a student id is not returned as a teacher.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::create_student(db).await?;

    let repo = TeacherRepository::new(db);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests listing teachers skips inactive ones.
///
/// Expected: Ok with only the active teacher
#[tokio::test]
async fn lists_only_active_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (active, _) = factory::create_teacher(db).await?;
    factory::teacher::TeacherFactory::new(db)
        .user(|u| u.active(false))
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    let teachers = repo.get_all_active().await?;

    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].profile.id, active.id);

    Ok(())
}
