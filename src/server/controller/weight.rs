use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::api::{ErrorDto, SuccessDto},
    server::{
        error::AppError, middleware::auth::AuthUser, model::progress_photo::DeletePhotoParam,
        service::weight::WeightService, state::AppState,
    },
};

/// Tag for grouping weight tracking endpoints in OpenAPI documentation
pub static WEIGHT_TAG: &str = "weight";

/// Delete a progress photo.
///
/// Removes the photo record and, best-effort, its file under the upload directory.
///
/// # Access Control
/// Requires a logged-in user who owns the photo; anonymous requests are redirected to
/// `/login` by the router.
///
/// # Returns
/// - `200 OK` - Photo deleted
/// - `400 Bad Request` - Photo ID is not a number
/// - `403 Forbidden` - Photo belongs to another user
/// - `404 Not Found` - No photo with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/photo/{photo_id}",
    tag = WEIGHT_TAG,
    params(
        ("photo_id" = i32, Path, description = "Progress photo ID")
    ),
    responses(
        (status = 200, description = "Photo deleted", body = SuccessDto),
        (status = 400, description = "Invalid photo ID", body = ErrorDto),
        (status = 403, description = "Photo belongs to another user", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    photo_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(photo_id) = photo_id.map_err(|e| AppError::BadRequest(e.body_text()))?;

    WeightService::new(&state.db)
        .delete_photo(
            DeletePhotoParam {
                photo_id,
                user_id: user.id,
            },
            &state.upload_dir,
        )
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok())))
}
