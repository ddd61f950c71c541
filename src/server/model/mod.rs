//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and carry only validated data.

pub mod assignment;
pub mod auth;
pub mod group;
pub mod kind;
pub mod position;
pub mod relation;
pub mod specialty;
pub mod subject;
pub mod summary;
pub mod user;
