use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        theme::{Theme, ThemeUpdatedDto, UpdateThemeDto},
    },
    server::{
        error::AppError, middleware::auth::AuthUser, model::user::UpdateThemeParam,
        service::settings::SettingsService, state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Save the logged-in user's theme preference.
///
/// Stores the preference token itself (`light`, `dark` or `system`); the client resolves
/// `system` against the OS color scheme.
///
/// # Access Control
/// Requires a logged-in user; anonymous requests get a 401 from the router.
///
/// # Returns
/// - `200 OK` - Preference stored, echoed back
/// - `400 Bad Request` - Missing or unknown theme value
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/settings/theme",
    tag = SETTINGS_TAG,
    request_body = UpdateThemeDto,
    responses(
        (status = 200, description = "Theme preference stored", body = ThemeUpdatedDto),
        (status = 400, description = "Unknown theme value", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_theme(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    payload: Result<Json<UpdateThemeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let theme = payload
        .theme
        .parse::<Theme>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let theme = SettingsService::new(&state.db)
        .update_theme(UpdateThemeParam {
            user_id: user.id,
            theme,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ThemeUpdatedDto {
            success: true,
            theme,
        }),
    ))
}
