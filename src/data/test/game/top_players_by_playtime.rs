use super::*;

/// Tests mapping playtime rows into entries.
///
/// Verifies that a NULL sum is reported as zero seconds.
///
/// Expected: Ok with rows in query order
#[tokio::test]
async fn maps_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_query_result(vec![
            row([
                ("user_name", Value::from("Alice")),
                ("total_seconds", Value::from(7_500i64)),
            ]),
            row([
                ("user_name", Value::from("Bob")),
                ("total_seconds", Value::BigInt(None)),
            ]),
        ])
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = GameDatabaseRepository::new(db)
        .top_players_by_playtime(10)
        .await?;

    assert_eq!(
        entries,
        vec![
            PlaytimeEntry {
                user_name: "Alice".to_string(),
                total_seconds: 7_500,
            },
            PlaytimeEntry {
                user_name: "Bob".to_string(),
                total_seconds: 0,
            },
        ]
    );

    Ok(())
}
