use super::*;

/// Tests looking up a player that has no record.
///
/// Expected: Ok(None), also when the file does not exist
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert!(store.get_player_achievements("ghost").await?.is_none());

    Ok(())
}

/// Tests that a record without achievements is distinct from no record.
///
/// Expected: Ok(Some) with an empty set
#[tokio::test]
async fn returns_empty_set_for_record_without_achievements() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Carol|carol|"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert_eq!(
        store.get_player_achievements("carol").await?,
        Some(BTreeSet::new())
    );

    Ok(())
}

/// Tests looking a player up by display name.
///
/// Verifies that the name is trimmed, matched exactly and that the first record
/// in file order wins.
///
/// Expected: Ok(Some) with the first matching ckey
#[tokio::test]
async fn finds_first_record_by_display_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&[
            "Twin|first_twin|pilot",
            "Twin|second_twin|veteran",
            "twin|lowercase_twin|",
        ])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert_eq!(
        store.get_player_achievements_by_display_name(" Twin ").await?,
        Some(("first_twin".to_string(), ids(&["pilot"])))
    );
    assert!(store
        .get_player_achievements_by_display_name("TWIN")
        .await?
        .is_none());

    Ok(())
}

/// Tests that a store file which cannot be read is reported as an error.
///
/// Verifies that neither lookups nor grants mistake the failure for an unknown
/// player or an empty store, and that nothing is written over the path.
///
/// Expected: Err(IoErr) from both calls
#[tokio::test]
async fn read_failure_propagates() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let path = test.path(TestFile::Players);
    std::fs::create_dir(&path).unwrap();

    let store = PlayerAchievementStore::new(path.clone());

    assert!(matches!(
        store.get_player_achievements("bob").await,
        Err(AppError::IoErr(_))
    ));
    assert!(matches!(
        store.add_achievement("bob", "Bob", "first_blood").await,
        Err(AppError::IoErr(_))
    ));
    assert!(path.is_dir());

    Ok(())
}
