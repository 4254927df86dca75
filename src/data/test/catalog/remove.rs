use super::*;

/// Tests removing a definition.
///
/// Verifies that only the matching line is dropped and the catalog is reloaded.
///
/// Expected: Ok(true) with the remaining lines intact
#[tokio::test]
async fn removes_matching_line() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&[
            "# combat",
            "first_blood|First Blood|Kill one creature",
            "veteran|Veteran|Play 100 hours",
        ])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));
    catalog.load().await?;

    assert!(catalog.remove("first_blood").await?);
    assert!(!catalog.exists("first_blood").await?);
    assert_eq!(
        test.read(TestFile::Catalog).unwrap(),
        "# combat\nveteran|Veteran|Play 100 hours\n"
    );

    Ok(())
}

/// Tests removing a definition that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&["veteran|Veteran|Play 100 hours"])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));

    assert!(!catalog.remove("pilot").await?);

    Ok(())
}
