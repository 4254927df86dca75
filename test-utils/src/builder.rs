use sea_orm::{DatabaseBackend, MockDatabase, Value};
use std::collections::BTreeMap;

use crate::{
    context::{TestContext, TestFile},
    error::TestError,
};

/// Row returned by the mock game database, keyed by column name.
pub type MockRow = BTreeMap<&'static str, Value>;

/// Builder for creating test contexts with pre-seeded files.
///
/// Provides a fluent interface for configuring test environments. Files that are not
/// seeded do not exist in the temporary directory, which lets tests cover the
/// missing-file paths of the repositories. Call `build()` to create the configured
/// test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_catalog(&["first_blood|First Blood|Kill one creature"])
///     .with_players(&["Bob|bob|first_blood"])
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Files to write before the context is handed out, with their contents.
    files: Vec<(TestFile, String)>,

    /// Result sets returned by the mock game database, in query order.
    ///
    /// When empty, no database connection is created and `TestContext::db` is `None`.
    query_results: Vec<Vec<MockRow>>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no files and no database configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty configuration
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            query_results: Vec::new(),
        }
    }

    /// Seeds a file with the provided lines, each terminated by a newline.
    ///
    /// # Arguments
    /// - `file` - Which file of the test directory to write
    /// - `lines` - Lines of the file, without line terminators
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file(mut self, file: TestFile, lines: &[&str]) -> Self {
        let contents = lines.iter().map(|line| format!("{line}\n")).collect();
        self.files.push((file, contents));
        self
    }

    /// Seeds the achievement catalog file.
    pub fn with_catalog(self, lines: &[&str]) -> Self {
        self.with_file(TestFile::Catalog, lines)
    }

    /// Seeds the player achievements file.
    pub fn with_players(self, lines: &[&str]) -> Self {
        self.with_file(TestFile::Players, lines)
    }

    /// Seeds the sponsors file.
    pub fn with_sponsors(self, lines: &[&str]) -> Self {
        self.with_file(TestFile::Sponsors, lines)
    }

    /// Seeds the disposable credits file.
    pub fn with_disposables(self, lines: &[&str]) -> Self {
        self.with_file(TestFile::Disposables, lines)
    }

    /// Appends one result set to the mock game database.
    ///
    /// Each query executed against the mock connection consumes the next result set,
    /// so result sets must be added in the order the code under test runs its queries.
    ///
    /// # Arguments
    /// - `rows` - Rows returned by the query, keyed by column name
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_query_result(mut self, rows: Vec<MockRow>) -> Self {
        self.query_results.push(rows);
        self
    }

    /// Builds the test context with the configured files and database.
    ///
    /// Creates a fresh temporary directory, writes every seeded file into it and, if any
    /// result sets were configured, opens a PostgreSQL mock connection returning them.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test context ready for use
    /// - `Err(TestError::Io)` - Failed to create the directory or write a seeded file
    pub async fn build(self) -> Result<TestContext, TestError> {
        let db = if self.query_results.is_empty() {
            None
        } else {
            Some(
                MockDatabase::new(DatabaseBackend::Postgres)
                    .append_query_results(self.query_results)
                    .into_connection(),
            )
        };

        let test = TestContext::new(db)?;

        for (file, contents) in self.files {
            std::fs::write(test.path(file), contents)?;
        }

        Ok(test)
    }
}
