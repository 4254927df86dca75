use super::*;

/// Tests resolving a known player name.
///
/// Expected: Ok(Some) with the normalized ckey
#[tokio::test]
async fn resolves_known_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_query_result(vec![row([("ckey", Value::from("alice"))])])
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ckey = GameDatabaseRepository::new(db).resolve_ckey(" Alice ").await?;

    assert_eq!(ckey, Some("alice".to_string()));

    Ok(())
}

/// Tests resolving a name no player has used.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_player_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_query_result(vec![])
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ckey = GameDatabaseRepository::new(db).resolve_ckey("ghost").await?;

    assert!(ckey.is_none());

    Ok(())
}
