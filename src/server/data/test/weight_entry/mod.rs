use crate::server::data::weight_entry::WeightEntryRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_recent_by_user;
