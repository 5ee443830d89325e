use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::theme::Theme;

/// User fields exposed to views and API responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub theme: Theme,
}
