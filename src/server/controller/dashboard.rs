use axum::{extract::State, response::Response, Extension};
use chrono::Utc;
use serde::Serialize;

use crate::{
    model::{news::NewsArticleDto, user::UserDto, weight::WeightEntryDto},
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        service::{
            news::{NewsService, FEATURED_NEWS_LIMIT},
            weight::{WeightService, RECENT_ENTRIES_LIMIT},
        },
        state::AppState,
        view::View,
    },
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView {
    title: &'static str,
    user: UserDto,
    recent_entries: Vec<WeightEntryDto>,
    featured_news: Vec<NewsArticleDto>,
}

/// GET /dashboard - Recent weight entries and featured news for the logged-in user.
///
/// # Access Control
/// Requires a logged-in user; anonymous visitors are redirected to `/login` by the router.
pub async fn index(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response, AppError> {
    let recent_entries = WeightService::new(&state.db)
        .recent_entries(user.id, RECENT_ENTRIES_LIMIT)
        .await?;
    let featured = NewsService::new(state.news.as_ref())
        .featured(FEATURED_NEWS_LIMIT)
        .await?;

    let now = Utc::now();
    let view = DashboardView {
        title: "Dashboard",
        user: user.into_dto(),
        recent_entries: recent_entries.into_iter().map(|e| e.into_dto()).collect(),
        featured_news: featured.into_iter().map(|a| a.into_dto(now)).collect(),
    };

    state.render(View::new("dashboard/index", &view)?)
}
