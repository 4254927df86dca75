use super::*;

/// Tests replacing a player's record wholesale.
///
/// Verifies that ids are normalized, empty ids dropped and the record keeps its
/// position in the file.
///
/// Expected: Ok with the record rewritten in place
#[tokio::test]
async fn replaces_record_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Alice|alice|pilot", "Bob|bob|veteran"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    store
        .upsert_player("ALICE", "Alice", ["Zeta", " ", "alpha "])
        .await?;

    assert_eq!(
        test.read(TestFile::Players).unwrap(),
        "Alice|alice|alpha,zeta\nBob|bob|veteran\n"
    );

    Ok(())
}

/// Tests that writing and reading back preserves every record.
///
/// Expected: Ok with display names verbatim and ids lowercased and sorted
#[tokio::test]
async fn round_trip_preserves_records() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    store
        .upsert_player("Dave", "Dave the Engineer", ["WELDER", "pilot"])
        .await?;
    store.upsert_player("erin", "Erin", Vec::<String>::new()).await?;

    assert_eq!(
        store.get_player_achievements("dave").await?,
        Some(ids(&["pilot", "welder"]))
    );
    assert_eq!(
        store
            .get_player_achievements_by_display_name("Dave the Engineer")
            .await?,
        Some(("dave".to_string(), ids(&["pilot", "welder"])))
    );
    assert_eq!(
        store.get_player_achievements("erin").await?,
        Some(BTreeSet::new())
    );

    Ok(())
}

/// Tests that a wholesale upsert sanitizes the display name as well.
///
/// Expected: Ok with the separator replaced and the ckey field intact
#[tokio::test]
async fn upsert_sanitizes_display_name() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    store.upsert_player("bob", "Bob|evil", ["pilot"]).await?;

    assert_eq!(test.read(TestFile::Players).unwrap(), "Bob¦evil|bob|pilot\n");
    assert_eq!(
        store.get_player_achievements("bob").await?,
        Some(ids(&["pilot"]))
    );

    Ok(())
}
