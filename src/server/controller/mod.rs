//! HTTP request handlers, one module per feature area.
//!
//! Handlers only orchestrate: they read typed extractors, call services, and return a
//! single response (rendered view, redirect, or JSON) or an `AppError`.

pub mod auth;
pub mod dashboard;
pub mod donate;
pub mod error;
pub mod home;
pub mod news;
pub mod settings;
pub mod weight;

#[cfg(test)]
mod test;
