use super::*;

/// Tests mapping balance rows into entries.
///
/// Expected: Ok with user, character and balance of every row
#[tokio::test]
async fn maps_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_query_result(vec![row([
            ("user_name", Value::from("Alice")),
            ("char_name", Value::from("Captain Alice")),
            ("bank_balance", Value::from(1_250_000i64)),
        ])])
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = GameDatabaseRepository::new(db)
        .top_players_by_balance(10, 20)
        .await?;

    assert_eq!(
        entries,
        vec![BalanceEntry {
            user_name: "Alice".to_string(),
            char_name: "Captain Alice".to_string(),
            bank_balance: 1_250_000,
        }]
    );

    Ok(())
}

/// Tests a page past the end of the leaderboard.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_query_result(vec![])
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = GameDatabaseRepository::new(db)
        .top_players_by_balance(10, 990)
        .await?;

    assert!(entries.is_empty());

    Ok(())
}
