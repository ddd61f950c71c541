use crate::server::{
    data::student::StudentRepository,
    model::user::{CreateStudentParams, CreateUserParams, UpdateStudentParams, UpdateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all_active;
mod update;

fn create_params(email: &str) -> CreateStudentParams {
    CreateStudentParams {
        user: CreateUserParams {
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "hashed".to_string(),
            password_confirmation: "hashed".to_string(),
            age: Some(19),
        },
        year_of_study: 2,
    }
}
