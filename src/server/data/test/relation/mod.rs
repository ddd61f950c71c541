use crate::server::data::relation::{Association, RelationRepository, Unlink};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod existing_item_ids;
mod link;
mod unlink;
