use std::sync::Arc;

use super::*;

/// Tests granting an achievement to a player without a record.
///
/// Verifies that the first grant creates the record, the second grant is a no-op,
/// and lookups are case-insensitive on the ckey.
///
/// Expected: Ok(true) then Ok(false), with {"first_blood"} stored for "bob"
#[tokio::test]
async fn adds_once_and_reports_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert!(store.add_achievement("bob", "Bob", "first_blood").await?);
    assert!(!store.add_achievement("bob", "Bob", "first_blood").await?);

    assert_eq!(
        store.get_player_achievements("BOB").await?,
        Some(ids(&["first_blood"]))
    );
    assert_eq!(test.read(TestFile::Players).unwrap(), "Bob|bob|first_blood\n");
    assert_eq!(test.entries().unwrap(), vec!["players_reachs.txt".to_string()]);

    Ok(())
}

/// Tests that an empty display name keeps the stored one.
///
/// Expected: Ok(true) with the original display name preserved
#[tokio::test]
async fn empty_display_name_keeps_existing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Alice|alice|pilot"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert!(store.add_achievement("alice", "  ", "veteran").await?);

    assert_eq!(
        test.read(TestFile::Players).unwrap(),
        "Alice|alice|pilot,veteran\n"
    );

    Ok(())
}

/// Tests that a new display name replaces the stored one.
///
/// Expected: Ok(true) with the display name updated
#[tokio::test]
async fn new_display_name_replaces_existing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Alice|alice|pilot"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    store.add_achievement("alice", "Alice Renamed", "veteran").await?;

    assert_eq!(
        store
            .get_player_achievements_by_display_name("Alice Renamed")
            .await?,
        Some(("alice".to_string(), ids(&["pilot", "veteran"])))
    );

    Ok(())
}

/// Tests a display name containing the field separator and a line break.
///
/// Verifies that the name cannot shift the ckey or achievement fields, so the
/// player stays reachable by ckey and by the name they typed.
///
/// Expected: Ok with one "Bob ¦ Admin|bob|first_blood" line
#[tokio::test]
async fn separator_in_display_name_keeps_record_intact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["Admin|admin|veteran"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert!(store.add_achievement("bob", "Bob | Admin", "first_blood").await?);
    assert!(store.add_achievement("bob", "Bob | Admin\n", "pilot").await?);

    assert_eq!(
        store.get_player_achievements("bob").await?,
        Some(ids(&["first_blood", "pilot"]))
    );
    assert_eq!(
        store.get_player_achievements("admin").await?,
        Some(ids(&["veteran"]))
    );
    assert_eq!(
        store
            .get_player_achievements_by_display_name("Bob | Admin")
            .await?,
        Some(("bob".to_string(), ids(&["first_blood", "pilot"])))
    );
    assert_eq!(
        test.read(TestFile::Players).unwrap(),
        "Admin|admin|veteran\nBob ¦ Admin|bob|first_blood,pilot\n"
    );

    Ok(())
}

/// Tests concurrent grants to two different players.
///
/// Verifies that neither read-modify-write cycle loses the other's change.
///
/// Expected: Ok with both players holding their achievement
#[tokio::test]
async fn concurrent_grants_never_lose_writes() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = Arc::new(PlayerAchievementStore::new(test.path(TestFile::Players)));

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let ckey = if i % 2 == 0 { "alice" } else { "bob" };
            store
                .add_achievement(ckey, "", &format!("ach_{i}"))
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap()?);
    }

    assert_eq!(
        store.get_player_achievements("alice").await?,
        Some(ids(&["ach_0", "ach_2", "ach_4", "ach_6", "ach_8"]))
    );
    assert_eq!(
        store.get_player_achievements("bob").await?,
        Some(ids(&["ach_1", "ach_3", "ach_5", "ach_7", "ach_9"]))
    );

    Ok(())
}
