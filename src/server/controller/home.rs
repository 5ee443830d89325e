use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use crate::server::{
    error::AppError, middleware::auth::CurrentUser, state::AppState, view::View,
};

/// Where logged-in visitors of the landing page are sent.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Serialize)]
struct HomeView {
    title: &'static str,
}

/// GET / - Landing page.
///
/// # Returns
/// - `303 See Other` to `/dashboard` - Visitor is logged in
/// - `200 OK` - `home/index` view with title "Welcome"
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    if user.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    state.render(View::new("home/index", &HomeView { title: "Welcome" })?)
}
