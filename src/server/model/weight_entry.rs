//! Weight entry domain model.

use chrono::{DateTime, Utc};

use crate::model::weight::WeightEntryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    pub id: i32,
    pub user_id: i32,
    pub weight: f64,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl WeightEntry {
    pub fn from_entity(entity: entity::weight_entry::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            weight: entity.weight,
            note: entity.note,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> WeightEntryDto {
        WeightEntryDto {
            id: self.id,
            weight: self.weight,
            note: self.note,
            recorded_at: self.recorded_at,
        }
    }
}
