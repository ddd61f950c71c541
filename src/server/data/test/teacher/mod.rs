use crate::server::{
    data::teacher::TeacherRepository,
    model::user::{CreateTeacherParams, CreateUserParams, UpdateTeacherParams, UpdateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod update;
