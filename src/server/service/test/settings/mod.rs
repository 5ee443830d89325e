use crate::{
    model::theme::Theme,
    server::{
        data::user::UserRepository, error::AppError, model::user::UpdateThemeParam,
        service::settings::SettingsService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod update_theme;
