use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WeightEntryDto {
    pub id: i32,
    pub weight: f64,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
