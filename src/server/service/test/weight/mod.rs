use crate::server::{
    data::progress_photo::ProgressPhotoRepository,
    error::{auth::AuthError, AppError},
    model::progress_photo::DeletePhotoParam,
    service::weight::WeightService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete_photo;
mod recent_entries;
