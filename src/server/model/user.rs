//! Student and teacher domain models and parameters.
//!
//! Both roles share a `user` row holding identity and credentials; the role row adds
//! the role-specific columns. Parameter types carry validated request data into the
//! service layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{
        CreateStudentDto, CreateTeacherDto, StudentDto, TeacherDto, UpdateStudentDto,
        UpdateTeacherDto,
    },
    server::{
        error::AppError,
        model::summary::{GroupSummary, PositionSummary, SpecialtySummary, SubjectSummary},
        util::validate::Validator,
    },
};

/// Identity fields shared by every user role.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i16>,
    /// False once the user has been soft-deleted.
    pub is_active: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl UserProfile {
    /// Converts a user entity at the repository boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            age: entity.age,
            is_active: entity.is_active,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }
}

/// Student with the groups they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub profile: UserProfile,
    pub year_of_study: i16,
    pub groups: Vec<GroupSummary>,
}

impl Student {
    pub fn into_dto(self) -> StudentDto {
        let p = self.profile;
        StudentDto {
            id: p.id,
            email: p.email,
            first_name: p.first_name,
            last_name: p.last_name,
            age: p.age,
            is_active: p.is_active,
            year_of_study: self.year_of_study,
            groups: self.groups.into_iter().map(GroupSummary::into_dto).collect(),
            created_on: p.created_on,
            updated_on: p.updated_on,
        }
    }
}

/// Teacher with position, taught subjects and headed specialties.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub profile: UserProfile,
    pub position_id: Option<Uuid>,
    pub position: Option<PositionSummary>,
    pub subjects: Vec<SubjectSummary>,
    pub specialties: Vec<SpecialtySummary>,
}

impl Teacher {
    pub fn into_dto(self) -> TeacherDto {
        let p = self.profile;
        TeacherDto {
            id: p.id,
            email: p.email,
            first_name: p.first_name,
            last_name: p.last_name,
            age: p.age,
            is_active: p.is_active,
            position_id: self.position_id,
            position: self.position.map(PositionSummary::into_dto),
            subjects: self.subjects.into_iter().map(SubjectSummary::into_dto).collect(),
            specialties: self
                .specialties
                .into_iter()
                .map(SpecialtySummary::into_dto)
                .collect(),
            created_on: p.created_on,
            updated_on: p.updated_on,
        }
    }
}

/// Validated user fields for registration.
///
/// `password` holds plain text until the service replaces it with its hash.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Confirmation that must equal `password`.
    pub password_confirmation: String,
    pub age: Option<i16>,
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub user: CreateUserParams,
    pub year_of_study: i16,
}

#[derive(Debug, Clone)]
pub struct CreateTeacherParams {
    pub user: CreateUserParams,
    pub position_id: Uuid,
}

/// Optional user fields for partial updates.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub age: Option<i16>,
}

#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: Uuid,
    pub user: UpdateUserParams,
    pub year_of_study: Option<i16>,
}

#[derive(Debug, Clone)]
pub struct UpdateTeacherParams {
    pub id: Uuid,
    pub user: UpdateUserParams,
    pub position_id: Option<Uuid>,
}

/// User fields as received, shared by create and update bodies.
struct UserFields {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
    password1: Option<String>,
    age: Option<i16>,
}

fn validate_create_user(v: &mut Validator, raw: UserFields) -> CreateUserParams {
    let email = v.require("email", raw.email);
    let first_name = v.require("first_name", raw.first_name);
    let last_name = v.require("last_name", raw.last_name);
    let password = v.require("password", raw.password);
    let password1 = v.require("password1", raw.password1);

    if let Some(email) = &email {
        v.email("email", email);
    }
    if let Some(first_name) = &first_name {
        v.first_name("first_name", first_name);
    }
    if let Some(last_name) = &last_name {
        v.last_name("last_name", last_name);
    }
    if let Some(password) = &password {
        v.password_strength("password", password);
    }
    if let Some(age) = raw.age {
        v.age("age", age);
    }

    // Missing fields are reported through the validator before these defaults are observed.
    CreateUserParams {
        email: email.unwrap_or_default(),
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        password: password.unwrap_or_default(),
        password_confirmation: password1.unwrap_or_default(),
        age: raw.age,
    }
}

fn validate_update_user(v: &mut Validator, raw: UserFields) -> UpdateUserParams {
    if let Some(email) = &raw.email {
        v.email("email", email);
    }
    if let Some(first_name) = &raw.first_name {
        v.first_name("first_name", first_name);
    }
    if let Some(last_name) = &raw.last_name {
        v.last_name("last_name", last_name);
    }
    if let Some(password) = &raw.password {
        v.password_strength("password", password);
        if raw.password1.is_none() {
            v.require::<String>("password1", None);
        }
    }
    if let Some(age) = raw.age {
        v.age("age", age);
    }

    UpdateUserParams {
        email: raw.email,
        first_name: raw.first_name,
        last_name: raw.last_name,
        password: raw.password,
        password_confirmation: raw.password1,
        age: raw.age,
    }
}

impl CreateStudentParams {
    /// Validates a registration body.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - Every field present and within bounds
    /// - `Err(AppError::ValidationErr)` - Messages for every failing field
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let user = validate_create_user(
            &mut v,
            UserFields {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password: dto.password,
                password1: dto.password1,
                age: dto.age,
            },
        );
        let year_of_study = v.require("year_of_study", dto.year_of_study);
        if let Some(year) = year_of_study {
            v.year_of_study("year_of_study", year);
        }
        v.finish()?;

        Ok(Self {
            user,
            year_of_study: year_of_study.unwrap_or_default(),
        })
    }
}

impl CreateTeacherParams {
    /// Validates a registration body; `position_id` is required.
    pub fn from_dto(dto: CreateTeacherDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let user = validate_create_user(
            &mut v,
            UserFields {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password: dto.password,
                password1: dto.password1,
                age: dto.age,
            },
        );
        let position_id = v.require("position_id", dto.position_id);
        v.finish()?;

        Ok(Self {
            user,
            position_id: position_id.unwrap_or_default(),
        })
    }
}

impl UpdateStudentParams {
    /// Validates the supplied fields of a partial update.
    pub fn from_dto(id: Uuid, dto: UpdateStudentDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let user = validate_update_user(
            &mut v,
            UserFields {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password: dto.password,
                password1: dto.password1,
                age: dto.age,
            },
        );
        if let Some(year) = dto.year_of_study {
            v.year_of_study("year_of_study", year);
        }
        v.finish()?;

        Ok(Self {
            id,
            user,
            year_of_study: dto.year_of_study,
        })
    }
}

impl UpdateTeacherParams {
    pub fn from_dto(id: Uuid, dto: UpdateTeacherDto) -> Result<Self, AppError> {
        let mut v = Validator::new();
        let user = validate_update_user(
            &mut v,
            UserFields {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password: dto.password,
                password1: dto.password1,
                age: dto.age,
            },
        );
        v.finish()?;

        Ok(Self {
            id,
            user,
            position_id: dto.position_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    fn valid_student_dto() -> CreateStudentDto {
        CreateStudentDto {
            email: Some("jane@uni.example.com".to_string()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            password: Some("Str0ng!Pass".to_string()),
            password1: Some("Str0ng!Pass".to_string()),
            age: Some(20),
            year_of_study: Some(2),
        }
    }

    /// Expected: a complete body converts without errors
    #[test]
    fn accepts_valid_student() {
        let params = CreateStudentParams::from_dto(valid_student_dto()).unwrap();
        assert_eq!(params.user.email, "jane@uni.example.com");
        assert_eq!(params.year_of_study, 2);
    }

    /// Expected: each missing required field gets its own message
    #[test]
    fn reports_missing_fields() {
        let dto = CreateStudentDto {
            email: None,
            year_of_study: None,
            ..valid_student_dto()
        };

        let Err(AppError::ValidationErr(err)) = CreateStudentParams::from_dto(dto) else {
            panic!("Expected validation error");
        };
        assert!(err.messages("email").is_some());
        assert!(err.messages("year_of_study").is_some());
        assert!(err.messages("first_name").is_none());
    }

    /// Expected: a password update without confirmation is rejected
    #[test]
    fn password_update_requires_confirmation() {
        let dto = UpdateStudentDto {
            password: Some("Str0ng!Pass".to_string()),
            ..Default::default()
        };

        let Err(AppError::ValidationErr(err)) = UpdateStudentParams::from_dto(Uuid::nil(), dto)
        else {
            panic!("Expected validation error");
        };
        assert!(err.messages("password1").is_some());
    }

    /// Expected: teacher registration requires a position
    #[test]
    fn teacher_requires_position() {
        let dto = CreateTeacherDto {
            email: Some("john@uni.example.com".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Smith".to_string()),
            password: Some("Str0ng!Pass".to_string()),
            password1: Some("Str0ng!Pass".to_string()),
            age: None,
            position_id: None,
        };

        let Err(AppError::ValidationErr(err)) = CreateTeacherParams::from_dto(dto) else {
            panic!("Expected validation error");
        };
        assert!(err.messages("position_id").is_some());
    }

    /// Tests serializing a teacher built from a stored user row.
    ///
    /// Expected: the JSON body never exposes the password hash
    #[test]
    fn teacher_dto_hides_password() {
        let teacher = Teacher {
            profile: UserProfile::from_entity(fixture::user::teacher_entity()),
            position_id: None,
            position: None,
            subjects: vec![],
            specialties: vec![],
        };

        let json = serde_json::to_value(teacher.into_dto()).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["first_name"], fixture::user::DEFAULT_FIRST_NAME);
        assert_eq!(json["position"], serde_json::Value::Null);
    }
}
