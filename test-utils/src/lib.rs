//! SS14 Bot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the bot. This crate
//! offers a builder pattern for creating test contexts backed by a temporary directory
//! of pre-seeded flat files and an optional SeaORM mock connection standing in for the
//! game database.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the temporary directory and mock database
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required files:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, context::TestFile};
//!
//! #[tokio::test]
//! async fn test_catalog_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_catalog(&["first_blood|First Blood|Kill one creature"])
//!         .build()
//!         .await?;
//!
//!     let path = test.path(TestFile::Catalog);
//!     // Perform file operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
