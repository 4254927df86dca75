use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::TestError;

/// Flat files the bot reads and writes, as laid out in a test directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFile {
    Catalog,
    Players,
    Sponsors,
    Disposables,
    ActionLog,
}

impl TestFile {
    /// File name of this file inside the test directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Catalog => "reachs.txt",
            Self::Players => "players_reachs.txt",
            Self::Sponsors => "sponsors.txt",
            Self::Disposables => "disposable.txt",
            Self::ActionLog => "actions.log",
        }
    }
}

/// Test context containing the temporary file directory and mock game database.
///
/// The directory and everything in it is deleted when the context is dropped, so
/// every test works on its own isolated copy of the files.
pub struct TestContext {
    /// Temporary directory holding the seeded files.
    pub dir: TempDir,

    /// Optional mock connection to the game database.
    ///
    /// Only present when the builder was given at least one query result set.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Arguments
    /// - `db` - Mock database connection, if the test needs one
    ///
    /// # Returns
    /// - `Ok(TestContext)` - New context with an empty directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new(db: Option<DatabaseConnection>) -> Result<Self, TestError> {
        Ok(Self {
            dir: TempDir::new()?,
            db,
        })
    }

    /// Absolute path of a file inside the test directory.
    ///
    /// The file does not have to exist.
    pub fn path(&self, file: TestFile) -> PathBuf {
        self.dir.path().join(file.file_name())
    }

    /// Reads a file from the test directory, treating a missing file as empty.
    ///
    /// # Returns
    /// - `Ok(String)` - File contents, or an empty string if the file does not exist
    /// - `Err(TestError::Io)` - File exists but could not be read
    pub fn read(&self, file: TestFile) -> Result<String, TestError> {
        match std::fs::read_to_string(self.path(file)) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Names of every entry currently in the test directory, sorted.
    ///
    /// Used to assert that no temporary files are left behind after a rewrite.
    pub fn entries(&self) -> Result<Vec<String>, TestError> {
        let mut names = std::fs::read_dir(self.dir.path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        names.sort();
        Ok(names)
    }
}
