//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Writes that touch
//! more than one row (user creation, hard deletes, association batches) run in a transaction.

pub mod assignment;
pub mod group;
pub mod position;
pub mod relation;
pub mod specialty;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod token_blocklist;
pub mod user;

#[cfg(test)]
mod test;
