use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        api::ErrorDto,
        news::{NewsCategory, NewsPageDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::CurrentUser, model::news::NewsFetchOptions,
        service::news::NewsService, state::AppState, view::View,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Raw news query parameters.
///
/// Values are kept as strings so malformed input falls back to defaults instead of
/// rejecting the request.
#[derive(Deserialize, Debug, Default)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl NewsQuery {
    /// Converts to fetch options.
    ///
    /// Unknown categories mean no filter. Unparseable numbers use the defaults and negative
    /// values become 0, which the provider raises to 1.
    pub fn into_options(self) -> NewsFetchOptions {
        let category = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .and_then(|c| c.parse::<NewsCategory>().ok());

        NewsFetchOptions::from_request(
            category,
            parse_count(self.limit.as_deref()),
            parse_count(self.page.as_deref()),
        )
    }
}

fn parse_count(value: Option<&str>) -> Option<u64> {
    let value = value?.trim().parse::<i64>().ok()?;
    Some(u64::try_from(value).unwrap_or(0))
}

#[derive(Serialize)]
struct NewsView {
    title: &'static str,
    description: &'static str,
    user: Option<UserDto>,
    category: Option<NewsCategory>,
    news: NewsPageDto,
}

/// GET /news - News page with one page of articles.
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<NewsQuery>,
) -> Result<Response, AppError> {
    let options = query.into_options();
    let category = options.category;

    let result = NewsService::new(state.news.as_ref()).fetch(options).await?;

    let view = NewsView {
        title: "Health & Fitness News",
        description: "The latest articles on fitness, nutrition and healthy weight loss.",
        user: user.map(|u| u.into_dto()),
        category,
        news: result.into_dto(Utc::now()),
    };

    state.render(View::new("news/index", &view)?)
}

/// Get one page of news articles.
///
/// Used by the news page to load further pages without a full reload.
///
/// # Returns
/// - `200 OK` - Page of articles with pagination totals
/// - `500 Internal Server Error` - News provider failure
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(
        ("category" = Option<String>, Query, description = "Exact category to filter by; unknown values are ignored"),
        ("limit" = Option<u64>, Query, description = "Articles per page, 1 to 50 (default: 6)"),
        ("page" = Option<u64>, Query, description = "One-based page number (default: 1)")
    ),
    responses(
        (status = 200, description = "Page of news articles", body = NewsPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result = NewsService::new(state.news.as_ref())
        .fetch(query.into_options())
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto(Utc::now()))))
}
