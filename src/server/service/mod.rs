//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data (repository) layer. They hold
//! no state of their own beyond borrowed handles and are responsible for:
//!
//! - **Business Logic**: Ownership checks, amount validation, pagination rules
//! - **Orchestration**: Coordinating repository calls with filesystem or provider calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod donate;
pub mod news;
pub mod settings;
pub mod weight;

#[cfg(test)]
mod test;
