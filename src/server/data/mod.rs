//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. All queries, updates and deletes for the
//! covered entities go through these structs.

pub mod progress_photo;
pub mod user;
pub mod weight_entry;

#[cfg(test)]
mod test;
