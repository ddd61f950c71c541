//! Id lists for appoint and disappoint requests.

use uuid::Uuid;

use crate::{
    model::relation::{StudentIdsDto, SubjectIdsDto},
    server::{error::AppError, util::validate::Validator},
};

/// A validated, non-empty batch of item ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemIds(pub Vec<Uuid>);

impl ItemIds {
    pub fn from_students(dto: StudentIdsDto) -> Result<Self, AppError> {
        Self::validate("student_ids", dto.student_ids)
    }

    pub fn from_subjects(dto: SubjectIdsDto) -> Result<Self, AppError> {
        Self::validate("subject_ids", dto.subject_ids)
    }

    fn validate(field: &str, ids: Option<Vec<Uuid>>) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let ids = v.require(field, ids);
        if let Some(ids) = &ids {
            v.non_empty(field, ids);
        }
        v.finish()?;

        Ok(Self(ids.unwrap_or_default()))
    }
}
