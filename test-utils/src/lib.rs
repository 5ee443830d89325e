//! Weight Loss Watch Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, a session bound to the same database, and factories for test rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for users, weight entries and progress photos
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_user_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let user = test_utils::factory::create_user(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
