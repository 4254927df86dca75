use super::*;

/// Tests revoking an achievement the player holds.
///
/// Expected: Ok(true) with the id removed from the record
#[tokio::test]
async fn removes_held_achievement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Bob|bob|first_blood,veteran"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert!(store.remove_achievement("Bob", "", "FIRST_BLOOD").await?);

    assert_eq!(test.read(TestFile::Players).unwrap(), "Bob|bob|veteran\n");

    Ok(())
}

/// Tests revoking from a player without a record or without the achievement.
///
/// Expected: Ok(false) in both cases with the file unchanged
#[tokio::test]
async fn returns_false_when_nothing_to_remove() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Bob|bob|veteran"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert!(!store.remove_achievement("ghost", "Ghost", "veteran").await?);
    assert!(!store.remove_achievement("bob", "Robert", "pilot").await?);

    assert_eq!(test.read(TestFile::Players).unwrap(), "Bob|bob|veteran\n");

    Ok(())
}

/// Tests that add and remove sequences produce the set difference.
///
/// Expected: Ok with only the achievements that were not removed
#[tokio::test]
async fn add_remove_sequence_matches_set_semantics() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    for id in ["a", "b", "c", "b"] {
        store.add_achievement("frank", "Frank", id).await?;
    }
    for id in ["b", "d"] {
        store.remove_achievement("frank", "Frank", id).await?;
    }

    assert_eq!(
        store.get_player_achievements("frank").await?,
        Some(ids(&["a", "c"]))
    );

    Ok(())
}
