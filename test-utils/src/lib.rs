//! Bandvault Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the archive
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, the unique position indexes the reorder logic relies on, and factories
//! for every table.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_album_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_library_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
