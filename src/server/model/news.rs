//! News domain models and fetch parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::news::{NewsArticleDto, NewsCategory, NewsPageDto, NewsSourceDto},
    server::service::news::format_relative_time,
};

/// Articles per page when the caller does not ask for a specific limit.
pub const DEFAULT_NEWS_LIMIT: u64 = 6;
/// Largest page size a caller may request.
pub const MAX_NEWS_LIMIT: u64 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsSource {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub source: NewsSource,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub category: NewsCategory,
}

impl NewsArticle {
    /// Converts to a DTO, rendering the article's age relative to `now`.
    pub fn into_dto(self, now: DateTime<Utc>) -> NewsArticleDto {
        let published_ago = format_relative_time(self.published_at, now);

        NewsArticleDto {
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            image_url: self.image_url,
            source: NewsSourceDto {
                id: self.source.id,
                name: self.source.name,
            },
            author: self.author,
            published_at: self.published_at,
            published_ago,
            category: self.category,
        }
    }
}

/// Filter and pagination options for fetching news.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsFetchOptions {
    /// Only articles with exactly this category when set.
    pub category: Option<NewsCategory>,
    /// Page size, clamped to `1..=MAX_NEWS_LIMIT` by providers.
    pub limit: u64,
    /// One-based page number; 0 is treated as 1.
    pub page: u64,
}

impl Default for NewsFetchOptions {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_NEWS_LIMIT,
            page: 1,
        }
    }
}

impl NewsFetchOptions {
    /// Builds options from optional request values, substituting defaults.
    ///
    /// Values are passed through unchanged; providers clamp them when paginating.
    pub fn from_request(
        category: Option<NewsCategory>,
        limit: Option<u64>,
        page: Option<u64>,
    ) -> Self {
        Self {
            category,
            limit: limit.unwrap_or(DEFAULT_NEWS_LIMIT),
            page: page.unwrap_or(1),
        }
    }
}

/// A page of articles plus the totals the pagination UI needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsFetchResult {
    pub articles: Vec<NewsArticle>,
    /// Number of articles matching the filter across all pages.
    pub total_results: u64,
    pub page: u64,
    pub has_more: bool,
}

impl NewsFetchResult {
    pub fn into_dto(self, now: DateTime<Utc>) -> NewsPageDto {
        NewsPageDto {
            articles: self.articles.into_iter().map(|a| a.into_dto(now)).collect(),
            total_results: self.total_results,
            page: self.page,
            has_more: self.has_more,
        }
    }
}
