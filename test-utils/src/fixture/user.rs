//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user::{self, UserRole};
use uuid::Uuid;

/// Plain-text password satisfying every strength rule.
pub const DEFAULT_PASSWORD: &str = "Passw0rd!";

pub const DEFAULT_EMAIL: &str = "jane.doe@example.com";
pub const DEFAULT_FIRST_NAME: &str = "Jane";
pub const DEFAULT_LAST_NAME: &str = "Doe";

/// Creates an active student user model with default values.
///
/// The stored password is a placeholder, not a valid hash.
///
/// # Example
///
/// ```rust,ignore
/// let user = fixture::user::entity();
/// assert!(user.is_active);
/// ```
pub fn entity() -> user::Model {
    let created = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    user::Model {
        id: Uuid::new_v4(),
        email: DEFAULT_EMAIL.to_string(),
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        password: "not-a-hash".to_string(),
        age: Some(20),
        is_active: true,
        role: UserRole::Student,
        created_on: created,
        updated_on: created,
    }
}

/// Creates a teacher user model with default values.
pub fn teacher_entity() -> user::Model {
    user::Model {
        role: UserRole::Teacher,
        ..entity()
    }
}
