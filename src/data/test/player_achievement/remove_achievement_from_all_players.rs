use super::*;

/// Tests purging an achievement held by 3 of 10 players.
///
/// Verifies the count and that the 7 untouched lines are byte-identical to the
/// seeded file.
///
/// Expected: Ok(3)
#[tokio::test]
async fn purges_only_holders() -> Result<(), AppError> {
    let lines = [
        "P0|p0|x",
        "P1|p1|a",
        "P2|p2|a,b",
        "P3|p3|a,x",
        "P4|p4|",
        "P5|p5|b",
        "P6|p6|b,x",
        "P7|p7|c",
        "P8|p8|a,c",
        "P9|p9|d",
    ];
    let test = TestBuilder::new().with_players(&lines).build().await.unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert_eq!(store.remove_achievement_from_all_players("x").await?, 3);

    let written = test.read(TestFile::Players).unwrap();
    let written: Vec<&str> = written.lines().collect();
    assert_eq!(written.len(), 10);

    for (index, (before, after)) in lines.iter().zip(&written).enumerate() {
        match index {
            0 => assert_eq!(*after, "P0|p0|"),
            3 => assert_eq!(*after, "P3|p3|a"),
            6 => assert_eq!(*after, "P6|p6|b"),
            _ => assert_eq!(before, after),
        }
    }

    Ok(())
}

/// Tests purging an achievement nobody holds.
///
/// Verifies that the file is not rewritten (comments survive).
///
/// Expected: Ok(0) with the file unchanged
#[tokio::test]
async fn no_holders_leaves_file_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_players(&["# players", "Bob|bob|veteran"])
        .build()
        .await
        .unwrap();
    let store = PlayerAchievementStore::new(test.path(TestFile::Players));

    assert_eq!(store.remove_achievement_from_all_players("pilot").await?, 0);
    assert_eq!(
        test.read(TestFile::Players).unwrap(),
        "# players\nBob|bob|veteran\n"
    );

    Ok(())
}
