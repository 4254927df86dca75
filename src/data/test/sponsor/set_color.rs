use super::*;

/// Tests changing the color of a registered sponsor.
///
/// Expected: Ok(true) with only the color field changed
#[tokio::test]
async fn replaces_color_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_sponsors(&["alice, AliceCkey, 111, 2025-01-01 00:00:00, #FF0000"])
        .build()
        .await
        .unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    assert!(repo.set_color("alice", "#00aa00").await?);

    assert_eq!(
        test.read(TestFile::Sponsors).unwrap(),
        "alice, AliceCkey, 111, 2025-01-01 00:00:00, #00aa00\n"
    );

    Ok(())
}

/// Tests changing the color on a line that has no color field yet.
///
/// Expected: Ok(true) with the color appended
#[tokio::test]
async fn appends_missing_color_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_sponsors(&["alice, AliceCkey, 111, 2025-01-01 00:00:00"])
        .build()
        .await
        .unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    assert!(repo.set_color("alice", "#ABCDEF").await?);

    assert_eq!(
        test.read(TestFile::Sponsors).unwrap(),
        "alice, AliceCkey, 111, 2025-01-01 00:00:00, #ABCDEF\n"
    );

    Ok(())
}

/// Tests changing the color of someone who never registered.
///
/// Expected: Ok(false) and no file created
#[tokio::test]
async fn returns_false_for_unknown_sponsor() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    assert!(!repo.set_color("alice", "#ABCDEF").await?);
    assert!(test.entries().unwrap().is_empty());

    Ok(())
}
