use super::*;

/// Tests granting credits to a ckey without a line.
///
/// Expected: Ok(true) with the line appended
#[tokio::test]
async fn appends_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_disposables(&["BobCkey, 1, 2"])
        .build()
        .await
        .unwrap();
    let repo = DisposableRepository::new(test.path(TestFile::Disposables));

    let created = repo
        .upsert(&DisposableRecord {
            ckey: "AliceCkey".to_string(),
            slots: 3,
            tokens: 40,
        })
        .await?;

    assert!(created);
    assert_eq!(
        test.read(TestFile::Disposables).unwrap(),
        "BobCkey, 1, 2\nAliceCkey, 3, 40\n"
    );

    Ok(())
}

/// Tests overwriting the credits of a ckey.
///
/// Expected: Ok(false) with the line replaced in place
#[tokio::test]
async fn replaces_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_disposables(&["AliceCkey, 1, 1", "BobCkey, 1, 2"])
        .build()
        .await
        .unwrap();
    let repo = DisposableRepository::new(test.path(TestFile::Disposables));

    let created = repo
        .upsert(&DisposableRecord {
            ckey: "AliceCkey".to_string(),
            slots: 5,
            tokens: 0,
        })
        .await?;

    assert!(!created);
    assert_eq!(
        test.read(TestFile::Disposables).unwrap(),
        "AliceCkey, 5, 0\nBobCkey, 1, 2\n"
    );

    Ok(())
}
