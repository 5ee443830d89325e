use crate::server::data::progress_photo::ProgressPhotoRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
