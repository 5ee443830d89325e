use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Topic tag carried by every news article.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NewsCategory {
    Fitness,
    Nutrition,
    WeightLoss,
    Exercise,
    Health,
    Wellness,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fitness => "fitness",
            Self::Nutrition => "nutrition",
            Self::WeightLoss => "weight-loss",
            Self::Exercise => "exercise",
            Self::Health => "health",
            Self::Wellness => "wellness",
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fitness" => Ok(Self::Fitness),
            "nutrition" => Ok(Self::Nutrition),
            "weight-loss" => Ok(Self::WeightLoss),
            "exercise" => Ok(Self::Exercise),
            "health" => Ok(Self::Health),
            "wellness" => Ok(Self::Wellness),
            other => Err(format!("Unknown news category '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NewsSourceDto {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub source: NewsSourceDto,
    pub author: String,
    pub published_at: DateTime<Utc>,
    /// Human readable age such as "2 hours ago".
    pub published_ago: String,
    pub category: NewsCategory,
}

/// One page of news articles as consumed by the pagination UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsPageDto {
    pub articles: Vec<NewsArticleDto>,
    pub total_results: u64,
    pub page: u64,
    pub has_more: bool,
}
