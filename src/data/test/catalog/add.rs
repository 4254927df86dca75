use std::sync::Arc;

use super::*;

/// Tests adding a definition to an existing catalog.
///
/// Verifies that the line is appended after the existing content and the
/// in-memory catalog is reloaded.
///
/// Expected: Ok(true) with the file and catalog both containing the entry
#[tokio::test]
async fn appends_definition_and_reloads() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&["# header", "first_blood|First Blood|Kill one creature"])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));
    catalog.load().await?;

    let added = catalog
        .add(definition("veteran", "Veteran", "Play 100 hours"))
        .await?;

    assert!(added);
    assert_eq!(
        test.read(TestFile::Catalog).unwrap(),
        "# header\nfirst_blood|First Blood|Kill one creature\nveteran|Veteran|Play 100 hours\n"
    );
    assert!(catalog.exists("veteran").await?);
    assert_eq!(test.entries().unwrap(), vec!["reachs.txt".to_string()]);

    Ok(())
}

/// Tests adding a definition whose id is already taken.
///
/// Expected: Ok(false) with the file unchanged
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&["first_blood|First Blood|Kill one creature"])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));

    let added = catalog
        .add(definition("first_blood", "Other", "Other text"))
        .await?;

    assert!(!added);
    assert_eq!(
        test.read(TestFile::Catalog).unwrap(),
        "first_blood|First Blood|Kill one creature\n"
    );

    Ok(())
}

/// Tests adding to a catalog whose file does not exist yet.
///
/// Expected: Ok(true) with the file created
#[tokio::test]
async fn creates_missing_file() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));
    catalog
        .add(definition("pilot", "Pilot", "Fly a shuttle"))
        .await?;

    assert_eq!(
        test.read(TestFile::Catalog).unwrap(),
        "pilot|Pilot|Fly a shuttle\n"
    );

    Ok(())
}

/// Tests concurrent additions of different definitions.
///
/// Verifies that serialized edits never overwrite each other.
///
/// Expected: Ok with every definition present in the catalog
#[tokio::test]
async fn concurrent_adds_keep_every_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let catalog = Arc::new(AchievementCatalog::new(test.path(TestFile::Catalog)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move {
                catalog
                    .add(definition(&format!("ach_{i}"), "Title", "Description"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap()?);
    }

    assert_eq!(catalog.load().await?, 8);

    Ok(())
}
