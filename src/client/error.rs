use thiserror::Error;

/// Failure to save a theme preference on the server.
#[derive(Error, Debug)]
pub enum ThemeSyncError {
    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server rejected theme preference with status {0}")]
    Status(reqwest::StatusCode),
}
