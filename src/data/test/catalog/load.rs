use super::*;

/// Tests loading a catalog with a single well-formed entry.
///
/// Verifies that the entry is keyed by its id and carries the title and
/// description from the file.
///
/// Expected: Ok with one definition
#[tokio::test]
async fn loads_single_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&["first_blood|First Blood|Kill one creature"])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));
    let count = catalog.load().await?;

    assert_eq!(count, 1);
    let all = catalog.get_all().await?;
    assert_eq!(
        all.get("first_blood"),
        Some(&definition("first_blood", "First Blood", "Kill one creature"))
    );

    Ok(())
}

/// Tests loading a catalog that mixes valid, malformed and comment lines.
///
/// Verifies that only the valid lines become definitions.
///
/// Expected: Ok with 3 definitions out of 6 data lines
#[tokio::test]
async fn skips_malformed_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&[
            "# achievements",
            "first_blood|First Blood|Kill one creature",
            "no_description|Title only",
            "veteran|Veteran|Play 100 hours",
            "",
            "Bad Id|Bad|Spaces are not allowed",
            "pilot|Pilot|Fly a shuttle",
            "extra|Extra|Fields|Here",
        ])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));

    assert_eq!(catalog.load().await?, 3);
    assert_eq!(catalog.len().await, 3);
    assert!(catalog.exists("veteran").await?);
    assert!(!catalog.exists("extra").await?);

    Ok(())
}

/// Tests loading when the catalog file does not exist.
///
/// Expected: Ok with an empty catalog
#[tokio::test]
async fn missing_file_yields_empty_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));

    assert_eq!(catalog.load().await?, 0);
    assert!(catalog.get_all().await?.is_empty());

    Ok(())
}

/// Tests that lookups load the catalog on first use and normalize the id.
///
/// Expected: Ok with the definition found through a padded, uppercase id
#[tokio::test]
async fn lookups_load_lazily_and_normalize() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog(&["first_blood|First Blood|Kill one creature"])
        .build()
        .await
        .unwrap();

    let catalog = AchievementCatalog::new(test.path(TestFile::Catalog));
    assert_eq!(catalog.len().await, 0);

    assert!(catalog.exists("  FIRST_BLOOD ").await?);
    let found = catalog.get("First_Blood").await?;

    assert_eq!(found.map(|d| d.title), Some("First Blood".to_string()));
    assert_eq!(catalog.len().await, 1);

    Ok(())
}

/// Tests loading when the catalog path cannot be read.
///
/// Verifies that a read failure other than a missing file is returned and leaves
/// an empty catalog behind instead of stale or partial entries.
///
/// Expected: Err(IoErr) with get_all() and len() empty
#[tokio::test]
async fn read_failure_returns_error_and_empties_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let path = test.path(TestFile::Catalog);
    std::fs::create_dir(&path).unwrap();

    let catalog = AchievementCatalog::new(path);

    assert!(matches!(catalog.load().await, Err(AppError::IoErr(_))));
    assert_eq!(catalog.len().await, 0);
    assert!(catalog.get_all().await?.is_empty());

    Ok(())
}
