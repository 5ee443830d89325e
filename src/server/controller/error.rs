use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::{
    model::user::UserDto,
    server::{error::AppError, middleware::auth::CurrentUser, state::AppState, view::View},
};

#[derive(Serialize)]
struct NotFoundView {
    title: &'static str,
    message: &'static str,
    user: Option<UserDto>,
}

/// Fallback for requests no route matched.
pub async fn not_found(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    let view = NotFoundView {
        title: "Page Not Found",
        message: "The page you are looking for does not exist.",
        user: user.map(|u| u.into_dto()),
    };

    state.render(View::new("errors/404", &view)?.with_status(StatusCode::NOT_FOUND))
}
