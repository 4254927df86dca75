//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! let member = create_test_member(1, "alice", Some("Alice"), &[111, 222]);
//! ```
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `member::create_test_user` - Create Serenity User objects

pub mod member;

pub use member::{create_test_member, create_test_user};
