//! Subject and assignment fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::{assignment, subject};
use uuid::Uuid;

use crate::fixture::DEFAULT_YEAR;

pub const DEFAULT_NAME: &str = "Linear Algebra";

/// Creates a subject model worth 5 credits.
pub fn entity() -> subject::Model {
    let created = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    subject::Model {
        id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
        year: DEFAULT_YEAR,
        credits: 5,
        created_on: created,
        updated_on: created,
    }
}

/// Creates an assignment model belonging to `subject_id`, without a deadline.
pub fn assignment_entity(subject_id: Uuid) -> assignment::Model {
    let created = Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap();
    assignment::Model {
        id: Uuid::new_v4(),
        name: "Homework 1".to_string(),
        max_mark: 10,
        deadline: None,
        subject_id,
        created_on: created,
        updated_on: created,
    }
}
