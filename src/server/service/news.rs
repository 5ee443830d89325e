//! Fitness and nutrition news.
//!
//! Controllers depend on the [`NewsProvider`] capability rather than a concrete source.
//! [`StaticNewsProvider`] serves a fixed sample of six articles and is the provider wired
//! in at startup until a real news API integration replaces it.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::{
    model::news::NewsCategory,
    server::{
        error::AppError,
        model::news::{
            NewsArticle, NewsFetchOptions, NewsFetchResult, NewsSource, MAX_NEWS_LIMIT,
        },
    },
};

/// Number of articles shown in the dashboard's featured section.
pub const FEATURED_NEWS_LIMIT: u64 = 3;

/// Source of news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetches one page of articles.
    ///
    /// Implementations filter by `options.category` first and paginate the filtered list
    /// second. `has_more` is true when `(page - 1) * limit + limit` is below the filtered
    /// total.
    async fn fetch_news(&self, options: NewsFetchOptions) -> Result<NewsFetchResult, AppError>;
}

/// Provider over a fixed in-memory article set.
pub struct StaticNewsProvider {
    articles: Vec<NewsArticle>,
}

impl StaticNewsProvider {
    /// Creates the provider with sample articles dated relative to now.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Creates the provider with sample articles dated relative to `reference`.
    pub fn at(reference: DateTime<Utc>) -> Self {
        Self {
            articles: sample_articles(reference),
        }
    }
}

impl Default for StaticNewsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsProvider for StaticNewsProvider {
    async fn fetch_news(&self, options: NewsFetchOptions) -> Result<NewsFetchResult, AppError> {
        Ok(paginate(&self.articles, &options))
    }
}

/// Filters then slices `articles` according to `options`.
fn paginate(articles: &[NewsArticle], options: &NewsFetchOptions) -> NewsFetchResult {
    let page = options.page.max(1);
    let limit = options.limit.clamp(1, MAX_NEWS_LIMIT);

    let filtered: Vec<&NewsArticle> = articles
        .iter()
        .filter(|a| options.category.map_or(true, |c| a.category == c))
        .collect();
    let total_results = filtered.len() as u64;

    let start = (page - 1).saturating_mul(limit);
    let page_articles = filtered
        .into_iter()
        .skip(usize::try_from(start).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .cloned()
        .collect();

    NewsFetchResult {
        articles: page_articles,
        total_results,
        page,
        has_more: start.saturating_add(limit) < total_results,
    }
}

/// Convenience queries on top of a [`NewsProvider`].
pub struct NewsService<'a> {
    provider: &'a dyn NewsProvider,
}

impl<'a> NewsService<'a> {
    pub fn new(provider: &'a dyn NewsProvider) -> Self {
        Self { provider }
    }

    pub async fn fetch(&self, options: NewsFetchOptions) -> Result<NewsFetchResult, AppError> {
        self.provider.fetch_news(options).await
    }

    /// Gets the first `limit` articles across all categories.
    pub async fn featured(&self, limit: u64) -> Result<Vec<NewsArticle>, AppError> {
        let result = self
            .provider
            .fetch_news(NewsFetchOptions {
                limit,
                ..Default::default()
            })
            .await?;

        Ok(result.articles)
    }

    /// Gets the first `limit` articles in `category`.
    pub async fn by_category(
        &self,
        category: NewsCategory,
        limit: u64,
    ) -> Result<Vec<NewsArticle>, AppError> {
        let result = self
            .provider
            .fetch_news(NewsFetchOptions {
                category: Some(category),
                limit,
                page: 1,
            })
            .await?;

        Ok(result.articles)
    }
}

/// Formats how long ago `date` was, as shown next to each article.
///
/// - under an hour: `"N minute(s) ago"`
/// - under a day: `"N hour(s) ago"`
/// - under a week: `"N day(s) ago"`
/// - otherwise the calendar date as `M/D/YYYY`
///
/// Dates after `now` count as zero minutes ago.
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - date).max(Duration::zero());
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days < 7 {
        format!("{} day{} ago", days, plural(days))
    } else {
        date.format("%-m/%-d/%Y").to_string()
    }
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn sample_articles(reference: DateTime<Utc>) -> Vec<NewsArticle> {
    let article = |id: &str,
                   title: &str,
                   description: &str,
                   slug: &str,
                   image: &str,
                   source: (&str, &str),
                   author: &str,
                   hours_ago: i64,
                   category: NewsCategory| NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: format!("https://example.com/{}", slug),
        image_url: format!(
            "https://images.unsplash.com/{}?w=400&h=300&fit=crop",
            image
        ),
        source: NewsSource {
            id: source.0.to_string(),
            name: source.1.to_string(),
        },
        author: author.to_string(),
        published_at: reference - Duration::hours(hours_ago),
        category,
    };

    vec![
        article(
            "1",
            "New Study Reveals Best Time of Day for Exercise",
            "Research shows morning workouts may boost metabolism more effectively than evening sessions, according to a new study published in the Journal of Sports Medicine.",
            "morning-exercise-study",
            "photo-1571019613454-1cb2f99b2d8b",
            ("health-daily", "Health Daily"),
            "Dr. Sarah Johnson",
            2,
            NewsCategory::Fitness,
        ),
        article(
            "2",
            "Mediterranean Diet Linked to Better Brain Health",
            "A long-term study of over 10,000 participants shows those following a Mediterranean diet had 25% lower risk of cognitive decline.",
            "mediterranean-brain-health",
            "photo-1498837167922-ddd27525d352",
            ("nutrition-news", "Nutrition News"),
            "Michael Chen",
            5,
            NewsCategory::Nutrition,
        ),
        article(
            "3",
            "Walking 10,000 Steps: Myth or Science?",
            "Experts weigh in on the popular fitness goal and whether it actually matters for your health. The answer may surprise you.",
            "walking-steps-myth",
            "photo-1476480862126-209bfaa8edc8",
            ("fitness-weekly", "Fitness Weekly"),
            "Emma Rodriguez",
            8,
            NewsCategory::Fitness,
        ),
        article(
            "4",
            "Protein Timing: Does It Really Matter?",
            "Sports nutritionists debate whether the anabolic window is real and how protein timing affects muscle building.",
            "protein-timing",
            "photo-1532550907401-a500c9a57435",
            ("muscle-science", "Muscle & Science"),
            "Dr. James Miller",
            12,
            NewsCategory::Nutrition,
        ),
        article(
            "5",
            "Sleep and Weight Loss: The Overlooked Connection",
            "Getting less than 7 hours of sleep may sabotage your weight loss efforts. Here is what the latest research says.",
            "sleep-weight-loss",
            "photo-1541781774459-bb2af2f05b55",
            ("wellness-today", "Wellness Today"),
            "Lisa Park",
            18,
            NewsCategory::WeightLoss,
        ),
        article(
            "6",
            "High-Intensity Interval Training: A Complete Guide",
            "Everything you need to know about HIIT workouts, from benefits to proper form and recovery strategies.",
            "hiit-guide",
            "photo-1517836357463-d25dfeac3438",
            ("fit-life", "Fit Life Magazine"),
            "Coach Alex Thompson",
            24,
            NewsCategory::Exercise,
        ),
    ]
}
