use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        assignment::{self, ASSIGNMENT_TAG},
        auth::{self, AUTH_TAG},
        group::{self, GROUP_TAG},
        position::{self, POSITION_TAG},
        relation::{self, RELATION_TAG},
        specialty::{self, SPECIALTY_TAG},
        student::{self, STUDENT_TAG},
        subject::{self, SUBJECT_TAG},
        teacher::{self, TEACHER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "University API", description = "Records of students, teachers and their courses"),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Login, logout and token refresh"),
        (name = STUDENT_TAG, description = "Student accounts"),
        (name = TEACHER_TAG, description = "Teacher accounts"),
        (name = POSITION_TAG, description = "Teacher positions"),
        (name = SPECIALTY_TAG, description = "Specialties"),
        (name = GROUP_TAG, description = "Student groups"),
        (name = SUBJECT_TAG, description = "Subjects and teacher-owned subjects"),
        (name = ASSIGNMENT_TAG, description = "Assignments within subjects"),
        (name = RELATION_TAG, description = "Appointing subjects and students"),
    )
)]
struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with Swagger UI mounted at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::refresh))
        .routes(routes!(student::create_student, student::get_students))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::soft_delete_student
        ))
        .routes(routes!(student::hard_delete_student))
        .routes(routes!(teacher::create_teacher, teacher::get_teachers))
        .routes(routes!(
            teacher::get_teacher,
            teacher::update_teacher,
            teacher::soft_delete_teacher
        ))
        .routes(routes!(teacher::hard_delete_teacher))
        .routes(routes!(
            subject::get_teacher_subjects,
            subject::create_teacher_subject
        ))
        .routes(routes!(
            subject::get_teacher_subject,
            subject::update_teacher_subject,
            subject::delete_teacher_subject
        ))
        .routes(routes!(
            relation::appoint_teacher_subject,
            relation::remove_teacher_subject
        ))
        .routes(routes!(
            relation::appoint_teacher_subjects,
            relation::remove_teacher_subjects
        ))
        .routes(routes!(
            relation::appoint_group_students,
            relation::remove_group_students
        ))
        .routes(routes!(
            relation::appoint_group_subjects,
            relation::remove_group_subjects
        ))
        .routes(routes!(
            relation::appoint_specialty_subjects,
            relation::remove_specialty_subjects
        ))
        .routes(routes!(assignment::create_assignment))
        .routes(routes!(
            assignment::update_assignment,
            assignment::delete_assignment
        ))
        .routes(routes!(position::create_position, position::get_positions))
        .routes(routes!(
            position::get_position,
            position::update_position,
            position::delete_position
        ))
        .routes(routes!(specialty::create_specialty, specialty::get_specialties))
        .routes(routes!(
            specialty::get_specialty,
            specialty::update_specialty,
            specialty::delete_specialty
        ))
        .routes(routes!(group::create_group, group::get_groups))
        .routes(routes!(
            group::get_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(subject::get_subjects))
        .routes(routes!(subject::get_subject))
        .routes(routes!(assignment::get_assignments))
        .routes(routes!(assignment::get_assignment))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
