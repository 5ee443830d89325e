//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's state
//! extraction. Every field is a cheap-to-clone handle:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - the view renderer and news provider sit behind `Arc<dyn _>`
//! - the upload directory is shared behind an `Arc`

use std::{path::PathBuf, sync::Arc};

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    service::news::NewsProvider,
    view::{View, ViewRenderer},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Template engine used for every server-rendered page.
    pub views: Arc<dyn ViewRenderer>,

    /// Source of news articles for the news and dashboard pages.
    pub news: Arc<dyn NewsProvider>,

    /// Directory progress photo files live under.
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates the application state from its collaborators.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `views` - Renderer for server-rendered pages
    /// - `news` - News article provider
    /// - `upload_dir` - Directory progress photo files live under
    pub fn new(
        db: DatabaseConnection,
        views: Arc<dyn ViewRenderer>,
        news: Arc<dyn NewsProvider>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            views,
            news,
            upload_dir: Arc::new(upload_dir),
        }
    }

    /// Renders a view into a complete response.
    ///
    /// # Returns
    /// - `Ok(Response)` - Rendered body with the view's status and the renderer's content type
    /// - `Err(AppError::ViewErr)` - Template rendering failed
    pub fn render(&self, view: View) -> Result<Response, AppError> {
        let body = self.views.render(view.template(), view.model())?;

        Ok((
            view.status(),
            [(header::CONTENT_TYPE, self.views.content_type())],
            body,
        )
            .into_response())
    }
}
