//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs or view models at the controller boundary.

pub mod donate;
pub mod news;
pub mod progress_photo;
pub mod user;
pub mod weight_entry;
