//! University Test Utils
//!
//! Provides shared testing utilities for the university records backend. This crate offers
//! a builder for creating test contexts with in-memory SQLite databases, factories that
//! insert records with sensible defaults, and fixtures that build entity models without
//! touching the database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_university_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, student) = factory::create_student(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
