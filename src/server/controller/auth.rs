//! Login page and logout.
//!
//! Credential verification belongs to the authentication subsystem. These handlers only
//! render the login page and end sessions.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tower_sessions::Session;

use crate::server::{
    controller::home::DASHBOARD_PATH, error::AppError, middleware::auth::CurrentUser,
    middleware::session::AuthSession, state::AppState, view::View,
};

#[derive(Serialize)]
struct LoginView {
    title: &'static str,
}

/// GET /login - Login page; logged-in visitors go to the dashboard.
pub async fn login(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    if user.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    state.render(View::new("auth/login", &LoginView { title: "Login" })?)
}

/// POST /logout - Clears the session and returns to the landing page.
pub async fn logout(session: Session) -> Result<Response, AppError> {
    let auth_session = AuthSession::new(&session);
    if let Some(user_id) = auth_session.get_user_id().await? {
        tracing::debug!(user_id, "User logged out");
    }
    auth_session.clear().await;

    Ok(Redirect::to("/").into_response())
}
