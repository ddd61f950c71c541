use crate::server::{
    data::specialty::SpecialtyRepository,
    model::specialty::{CreateSpecialtyParams, UpdateSpecialtyParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests a specialty is loaded with its groups and curriculum.
///
/// Expected: one group and one subject summary
#[tokio::test]
async fn finds_specialty_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialtyRepository::new(db);
    let specialty = repo
        .create(CreateSpecialtyParams {
            name: "Computer Science".to_string(),
            year: 2024,
            teacher_id: None,
        })
        .await?;
    let group = factory::group::GroupFactory::new(db)
        .specialty_id(specialty.id)
        .build()
        .await?;
    let subject = factory::create_subject(db).await?;
    factory::link::subject_specialty(db, subject.id, specialty.id).await?;

    let found = repo.find_by_id(specialty.id).await?.unwrap();

    assert_eq!(found.groups.len(), 1);
    assert_eq!(found.groups[0].id, group.id);
    assert_eq!(found.subjects.len(), 1);
    assert_eq!(found.subjects[0].id, subject.id);

    Ok(())
}

/// Tests (name, year) uniqueness is scoped to the pair and excludes self.
///
/// Expected: only an exact pair on another specialty collides
#[tokio::test]
async fn name_and_year_taken_checks_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialty = factory::specialty::SpecialtyFactory::new(db)
        .name("Physics")
        .year(2023)
        .build()
        .await?;

    let repo = SpecialtyRepository::new(db);
    assert!(repo.name_and_year_taken("Physics", 2023, None).await?);
    assert!(!repo.name_and_year_taken("Physics", 2024, None).await?);
    assert!(!repo
        .name_and_year_taken("Physics", 2023, Some(specialty.id))
        .await?);

    Ok(())
}

/// Tests assigning a head teacher on update.
///
/// Expected: Ok with teacher_id set and year unchanged
#[tokio::test]
async fn updates_head_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialty = factory::create_specialty(db).await?;
    let (_, teacher) = factory::create_teacher(db).await?;

    let repo = SpecialtyRepository::new(db);
    let updated = repo
        .update(UpdateSpecialtyParams {
            id: specialty.id,
            name: None,
            year: None,
            teacher_id: Some(teacher.id),
        })
        .await?;

    assert_eq!(updated.teacher_id, Some(teacher.id));
    assert_eq!(updated.year, specialty.year);

    Ok(())
}

/// Tests deleting a specialty detaches groups and removes curriculum links.
///
/// Expected: group kept without specialty, subject kept, link gone
#[tokio::test]
async fn delete_detaches_groups_and_subjects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialty = factory::create_specialty(db).await?;
    let group = factory::group::GroupFactory::new(db)
        .specialty_id(specialty.id)
        .build()
        .await?;
    let subject = factory::create_subject(db).await?;
    factory::link::subject_specialty(db, subject.id, specialty.id).await?;

    let repo = SpecialtyRepository::new(db);
    assert!(repo.delete(specialty.id).await?);

    let group = entity::prelude::Group::find_by_id(group.id)
        .one(db)
        .await?
        .unwrap();
    assert!(group.specialty_id.is_none());
    assert!(entity::prelude::SubjectSpecialty::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Subject::find_by_id(subject.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
