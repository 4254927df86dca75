use super::*;

/// Tests registering a new sponsor.
///
/// Expected: Ok(None) with the line appended after existing lines
#[tokio::test]
async fn appends_new_sponsor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_sponsors(&["bob, BobCkey, 222, 2025-01-01 00:00:00, #00FF00"])
        .build()
        .await
        .unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    let previous = repo.upsert(&record("alice", "AliceCkey")).await?;

    assert!(previous.is_none());
    assert_eq!(
        test.read(TestFile::Sponsors).unwrap(),
        "bob, BobCkey, 222, 2025-01-01 00:00:00, #00FF00\n\
         alice, AliceCkey, 111, 2025-03-04 05:06:07, #FF0000\n"
    );

    Ok(())
}

/// Tests re-registering an existing sponsor with a new ckey.
///
/// Verifies that the previous ckey is reported and the line is replaced in place.
///
/// Expected: Ok(Some(previous ckey))
#[tokio::test]
async fn replaces_existing_sponsor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_sponsors(&[
            "alice, OldCkey, 111, 2025-01-01 00:00:00, #123456",
            "bob, BobCkey, 222, 2025-01-01 00:00:00, #00FF00",
        ])
        .build()
        .await
        .unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    let previous = repo.upsert(&record("alice", "NewCkey")).await?;

    assert_eq!(previous, Some("OldCkey".to_string()));
    assert_eq!(
        test.read(TestFile::Sponsors).unwrap(),
        "alice, NewCkey, 111, 2025-03-04 05:06:07, #FF0000\n\
         bob, BobCkey, 222, 2025-01-01 00:00:00, #00FF00\n"
    );

    Ok(())
}
