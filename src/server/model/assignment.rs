//! Assignment domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::assignment::{AssignmentDto, CreateAssignmentDto, UpdateAssignmentDto},
    server::{
        error::{resource::ResourceError, AppError},
        util::validate::Validator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: Uuid,
    pub name: String,
    pub max_mark: i16,
    pub deadline: Option<DateTime<Utc>>,
    pub subject_id: Uuid,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Assignment {
    pub fn from_entity(entity: entity::assignment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            max_mark: entity.max_mark,
            deadline: entity.deadline,
            subject_id: entity.subject_id,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }

    pub fn into_dto(self) -> AssignmentDto {
        AssignmentDto {
            id: self.id,
            name: self.name,
            max_mark: self.max_mark,
            deadline: self.deadline,
            subject_id: self.subject_id,
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAssignmentParams {
    pub subject_id: Uuid,
    pub name: String,
    pub max_mark: i16,
    pub deadline: Option<DateTime<Utc>>,
}

impl CreateAssignmentParams {
    /// Validates an assignment body; deadlines are compared against `now`.
    pub fn from_dto(
        subject_id: Uuid,
        dto: CreateAssignmentDto,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let name = v.require("name", dto.name);
        let max_mark = v.require("max_mark", dto.max_mark);
        if let Some(name) = &name {
            v.name("name", name);
        }
        if let Some(max_mark) = max_mark {
            v.max_mark("max_mark", max_mark);
        }
        if let Some(deadline) = dto.deadline {
            v.deadline("deadline", deadline, now);
        }
        v.finish()?;

        Ok(Self {
            subject_id,
            name: name.unwrap_or_default(),
            max_mark: max_mark.unwrap_or_default(),
            deadline: dto.deadline,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAssignmentParams {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub name: Option<String>,
    pub max_mark: Option<i16>,
    pub deadline: Option<DateTime<Utc>>,
}

impl UpdateAssignmentParams {
    /// Validates a partial update.
    ///
    /// # Returns
    /// - `Err(ResourceError::ImmutableField)` - Body tries to move the assignment to another subject
    /// - `Err(AppError::ValidationErr)` - A supplied field is out of bounds
    pub fn from_dto(
        id: Uuid,
        subject_id: Uuid,
        dto: UpdateAssignmentDto,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if dto.subject_id.is_some() {
            return Err(ResourceError::ImmutableField("subject_id").into());
        }

        let mut v = Validator::new();
        if let Some(name) = &dto.name {
            v.name("name", name);
        }
        if let Some(max_mark) = dto.max_mark {
            v.max_mark("max_mark", max_mark);
        }
        if let Some(deadline) = dto.deadline {
            v.deadline("deadline", deadline, now);
        }
        v.finish()?;

        Ok(Self {
            id,
            subject_id,
            name: dto.name,
            max_mark: dto.max_mark,
            deadline: dto.deadline,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    /// Expected: supplying subject_id on update is refused before validation
    #[test]
    fn update_rejects_subject_change() {
        let dto = UpdateAssignmentDto {
            subject_id: Some(serde_json::json!(Uuid::new_v4())),
            ..Default::default()
        };

        let result = UpdateAssignmentParams::from_dto(Uuid::new_v4(), Uuid::new_v4(), dto, Utc::now());
        assert!(matches!(
            result,
            Err(AppError::ResourceErr(ResourceError::ImmutableField("subject_id")))
        ));
    }

    /// Expected: a past deadline fails validation
    #[test]
    fn create_rejects_past_deadline() {
        let now = Utc::now();
        let dto = CreateAssignmentDto {
            name: Some("Lab 1".to_string()),
            max_mark: Some(10),
            deadline: Some(now - Duration::hours(1)),
        };

        let Err(AppError::ValidationErr(err)) =
            CreateAssignmentParams::from_dto(Uuid::new_v4(), dto, now)
        else {
            panic!("Expected validation error");
        };
        assert!(err.messages("deadline").is_some());
    }

    /// Expected: a stored assignment keeps its subject link and missing deadline
    #[test]
    fn converts_stored_assignment() {
        let subject = test_utils::fixture::subject::entity();
        let stored = test_utils::fixture::subject::assignment_entity(subject.id);

        let dto = Assignment::from_entity(stored.clone()).into_dto();

        assert_eq!(dto.subject_id, subject.id);
        assert_eq!(dto.max_mark, stored.max_mark);
        assert!(dto.deadline.is_none());
    }
}
