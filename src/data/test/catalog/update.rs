use super::*;

/// Tests editing only the title of a definition.
///
/// Verifies that the description is kept and comment lines survive the rewrite.
///
/// Expected: Ok(Some) with the new title written in place
#[tokio::test]
async fn updates_title_in_place() -> Result<(), AppError> {
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

    let updated = catalog
        .update("FIRST_BLOOD", Some("Bloodied".to_string()), None)
        .await?;

    assert_eq!(
        updated,
        Some(definition("first_blood", "Bloodied", "Kill one creature"))
    );
    assert_eq!(
        test.read(TestFile::Catalog).unwrap(),
        "# combat\nfirst_blood|Bloodied|Kill one creature\nveteran|Veteran|Play 100 hours\n"
    );
    assert_eq!(
        catalog.get("first_blood").await?.map(|d| d.title),
        Some("Bloodied".to_string())
    );

    Ok(())
}

/// Tests editing a definition that does not exist.
///
/// Expected: Ok(None) with the file unchanged
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&["veteran|Veteran|Play 100 hours"])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));

    let updated = catalog
        .update("pilot", None, Some("Fly".to_string()))
        .await?;

    assert!(updated.is_none());
    assert_eq!(
        test.read(TestFile::Catalog).unwrap(),
        "veteran|Veteran|Play 100 hours\n"
    );

    Ok(())
}
