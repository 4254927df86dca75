use super::*;

/// Tests moving credits to a sponsor's new ckey.
///
/// Verifies that missing fields are filled with zero.
///
/// Expected: Ok(true) with the ckey replaced
#[tokio::test]
async fn renames_and_fills_missing_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_disposables(&["OldCkey, 7", "BobCkey, 1, 2"])
        .build()
        .await
        .unwrap();
    let repo = DisposableRepository::new(test.path(TestFile::Disposables));

    assert!(repo.rename_ckey("OldCkey", "NewCkey").await?);

    assert_eq!(
        test.read(TestFile::Disposables).unwrap(),
        "NewCkey, 7, 0\nBobCkey, 1, 2\n"
    );

    Ok(())
}

/// Tests moving credits when the old ckey has none.
///
/// Expected: Ok(false) and the missing file stays missing
#[tokio::test]
async fn no_credits_nothing_written() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let repo = DisposableRepository::new(test.path(TestFile::Disposables));

    assert!(!repo.rename_ckey("OldCkey", "NewCkey").await?);
    assert!(test.entries().unwrap().is_empty());

    Ok(())
}
