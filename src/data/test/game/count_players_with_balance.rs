use super::*;

/// Tests reading the leaderboard size.
///
/// Expected: Ok(42)
#[tokio::test]
async fn reads_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_query_result(vec![row([("total", Value::from(42i64))])])
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let total = GameDatabaseRepository::new(db)
        .count_players_with_balance()
        .await?;

    assert_eq!(total, 42);

    Ok(())
}
