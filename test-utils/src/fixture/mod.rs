//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build entity models and shared constants in memory. They serve as defaults for
//! the factories and as inputs for unit tests of domain conversions.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let subject = fixture::subject::entity();
//! ```

pub mod subject;
pub mod user;

/// Academic year used for records created by fixtures and factories.
pub const DEFAULT_YEAR: i32 = 2024;
