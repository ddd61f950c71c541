//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness rules, active-user and ownership guards
//! - **Orchestration**: Coordinating multiple repository calls for one request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Tokens**: Issuing, decoding and revoking JWTs

pub mod assignment;
pub mod auth;
pub mod group;
pub mod position;
pub mod relation;
pub mod specialty;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
