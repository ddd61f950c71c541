//! Data transfer objects shared by the HTTP layer.
//!
//! Request DTOs keep every field optional so that missing values can be reported
//! per field by the server-side validation instead of failing deserialization.

pub mod api;
pub mod assignment;
pub mod auth;
pub mod group;
pub mod position;
pub mod relation;
pub mod specialty;
pub mod subject;
pub mod user;
