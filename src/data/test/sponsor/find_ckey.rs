use super::*;

/// Tests finding the ckey of a registered sponsor.
///
/// Verifies that the Discord name must match the first field exactly, so a name
/// that is only a prefix of another does not match.
///
/// Expected: Ok(Some) for the exact name, Ok(None) otherwise
#[tokio::test]
async fn finds_ckey_by_exact_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_sponsors(&[
            "alice_alt, AltCkey, 111, 2025-01-01 00:00:00, #FF0000",
            "alice, AliceCkey, 111, 2025-01-01 00:00:00, #00FF00",
        ])
        .build()
        .await
        .unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    assert_eq!(repo.find_ckey("alice").await?, Some("AliceCkey".to_string()));
    assert!(repo.find_ckey("ali").await?.is_none());

    Ok(())
}

/// Tests looking a sponsor up when the file does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_file_has_no_sponsors() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    assert!(repo.find_ckey("alice").await?.is_none());

    Ok(())
}
