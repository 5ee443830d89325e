//! SeaORM entity models for the Weight Loss Watch schema.

pub mod prelude;

pub mod progress_photo;
pub mod user;
pub mod weight_entry;
