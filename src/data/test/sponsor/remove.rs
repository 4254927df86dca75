use super::*;

/// Tests removing a sponsor whose role expired.
///
/// Expected: Ok(true) with other sponsors untouched
#[tokio::test]
async fn removes_only_that_sponsor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_sponsors(&[
            "alice, AliceCkey, 111, 2025-01-01 00:00:00, #FF0000",
            "alice2, Alice2Ckey, 111, 2025-01-01 00:00:00, #FF0000",
        ])
        .build()
        .await
        .unwrap();
    let repo = SponsorRepository::new(test.path(TestFile::Sponsors));

    assert!(repo.remove("alice").await?);
    assert!(!repo.remove("alice").await?);

    assert_eq!(
        test.read(TestFile::Sponsors).unwrap(),
        "alice2, Alice2Ckey, 111, 2025-01-01 00:00:00, #FF0000\n"
    );

    Ok(())
}
