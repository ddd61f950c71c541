use super::*;

/// Tests unlinking removes only the listed items of that owner.
///
/// Expected: Ok(Removed(1)), the other subject and the other group's link remain
#[tokio::test]
async fn removes_only_listed_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let other_group = factory::create_group(db).await?;
    let kept = factory::create_subject(db).await?;
    let removed = factory::create_subject(db).await?;
    factory::link::subject_group(db, kept.id, group.id).await?;
    factory::link::subject_group(db, removed.id, group.id).await?;
    factory::link::subject_group(db, removed.id, other_group.id).await?;

    let repo = RelationRepository::new(db);
    let count = repo
        .unlink(Association::GroupSubjects, group.id, &[removed.id])
        .await?;

    assert_eq!(count, Unlink::Removed(1));
    assert_eq!(
        repo.item_ids(Association::GroupSubjects, group.id).await?,
        vec![kept.id]
    );
    assert_eq!(
        repo.owner_ids(Association::GroupSubjects, removed.id).await?,
        vec![other_group.id]
    );

    Ok(())
}

/// Tests unlinking a batch that contains an item the owner is not linked to.
///
/// Expected: Ok(NotLinked(id)) and the linked item is still in place
#[tokio::test]
async fn rejects_batch_with_unlinked_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialty = factory::create_specialty(db).await?;
    let linked = factory::create_subject(db).await?;
    let stranger = factory::create_subject(db).await?;
    factory::link::subject_specialty(db, linked.id, specialty.id).await?;

    let repo = RelationRepository::new(db);
    let outcome = repo
        .unlink(
            Association::SpecialtySubjects,
            specialty.id,
            &[linked.id, stranger.id],
        )
        .await?;

    assert_eq!(outcome, Unlink::NotLinked(stranger.id));
    assert_eq!(
        repo.item_ids(Association::SpecialtySubjects, specialty.id)
            .await?,
        vec![linked.id]
    );

    Ok(())
}
