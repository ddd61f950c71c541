use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    model::api::ErrorDto,
    server::{model::kind::EntityKind, util::message::format_ids},
};

/// Failures tied to looking up or relating stored records.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Record addressed by the request path does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("{kind} with <id={id}> Not Found.")]
    NotFound { kind: EntityKind, id: Uuid },

    /// Some of the records listed in the request body do not exist.
    ///
    /// Results in a 404 Not Found response listing every missing id.
    #[error("{kind} with <id={}> Not Found.", format_ids(.ids))]
    ManyNotFound { kind: EntityKind, ids: Vec<Uuid> },

    /// Record exists but has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("{kind} with <id={id}> Is Not Active.")]
    NotActive { kind: EntityKind, id: Uuid },

    /// A user referenced from the request body does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("{kind} <id={id}> Does Not Exist.")]
    UserDoesNotExist { kind: EntityKind, id: Uuid },

    /// A non-user record referenced from the request body does not exist.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{kind} <id={id}> Does Not Exist.")]
    ReferenceDoesNotExist { kind: EntityKind, id: Uuid },

    /// A unique value is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{kind} with <{value}> Already Exists.")]
    AlreadyExists { kind: EntityKind, value: String },

    /// The (name, year) pair is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{kind} with <name={name}> and <year={year}> Already Exists.")]
    NameAndYearTaken {
        kind: EntityKind,
        name: String,
        year: i32,
    },

    /// Item is not linked to the owner it was addressed through.
    ///
    /// Results in a 404 Not Found response.
    #[error("{item_kind} <id={item_id}> Not Found In {owner_kind} <id={owner_id}>.")]
    NotInCollection {
        item_kind: EntityKind,
        item_id: Uuid,
        owner_kind: EntityKind,
        owner_id: Uuid,
    },

    /// Field exists on the record but cannot be changed after creation.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Impossible To Update <{0}>.")]
    ImmutableField(&'static str),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { .. }
            | Self::ManyNotFound { .. }
            | Self::UserDoesNotExist { .. }
            | Self::NotInCollection { .. } => StatusCode::NOT_FOUND,
            Self::NotActive { .. } => StatusCode::FORBIDDEN,
            Self::ReferenceDoesNotExist { .. }
            | Self::AlreadyExists { .. }
            | Self::NameAndYearTaken { .. }
            | Self::ImmutableField(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::read_error;

    /// Tests the status and message of every lookup failure.
    ///
    /// Expected: missing records are 404 with the kind and id in the message
    #[tokio::test]
    async fn missing_records_are_not_found() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();

        let cases = [
            (
                ResourceError::NotFound { kind: EntityKind::Student, id },
                format!("Student with <id={id}> Not Found."),
            ),
            (
                ResourceError::ManyNotFound { kind: EntityKind::Subject, ids: vec![id, other] },
                format!("Subject with <id=[{id}, {other}]> Not Found."),
            ),
            (
                ResourceError::UserDoesNotExist { kind: EntityKind::Curator, id },
                format!("Curator <id={id}> Does Not Exist."),
            ),
            (
                ResourceError::NotInCollection {
                    item_kind: EntityKind::Assignment,
                    item_id: id,
                    owner_kind: EntityKind::Subject,
                    owner_id: other,
                },
                format!("Assignment <id={id}> Not Found In Subject <id={other}>."),
            ),
        ];

        for (err, message) in cases {
            let (status, body) = read_error(err.into_response()).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body.error, message);
        }
    }

    /// Expected: an inactive record is 403
    #[tokio::test]
    async fn inactive_record_is_forbidden() {
        let id = Uuid::new_v4();

        let err = ResourceError::NotActive { kind: EntityKind::Teacher, id };
        let (status, body) = read_error(err.into_response()).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error, format!("Teacher with <id={id}> Is Not Active."));
    }

    /// Expected: conflicts and bad references in the body are 400
    #[tokio::test]
    async fn body_conflicts_are_bad_request() {
        let id = Uuid::new_v4();

        let cases = [
            (
                ResourceError::ReferenceDoesNotExist { kind: EntityKind::Position, id },
                format!("Position <id={id}> Does Not Exist."),
            ),
            (
                ResourceError::AlreadyExists {
                    kind: EntityKind::Position,
                    value: "Professor".to_string(),
                },
                "Position with <Professor> Already Exists.".to_string(),
            ),
            (
                ResourceError::NameAndYearTaken {
                    kind: EntityKind::Group,
                    name: "KN-21".to_string(),
                    year: 2024,
                },
                "Group with <name=KN-21> and <year=2024> Already Exists.".to_string(),
            ),
            (
                ResourceError::ImmutableField("subject_id"),
                "Impossible To Update <subject_id>.".to_string(),
            ),
        ];

        for (err, message) in cases {
            let (status, body) = read_error(err.into_response()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.error, message);
        }
    }
}
