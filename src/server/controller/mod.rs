//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, turn request DTOs into validated params,
//! call a service and wrap the result in the response envelope.

pub mod assignment;
pub mod auth;
pub mod group;
pub mod position;
pub mod relation;
pub mod specialty;
pub mod student;
pub mod subject;
pub mod teacher;
