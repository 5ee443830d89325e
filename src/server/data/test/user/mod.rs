use crate::{model::theme::Theme, server::data::user::UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod update_theme;
