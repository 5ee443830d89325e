use async_trait::async_trait;

use crate::{
    client::{error::ThemeSyncError, theme::ThemeRemote},
    model::theme::{Theme, UpdateThemeDto},
};

/// Path of the theme preference endpoint relative to the site root.
pub const THEME_ENDPOINT: &str = "/api/settings/theme";

/// Saves theme preferences through `POST /api/settings/theme`.
///
/// The request is authenticated by whatever cookies the supplied client carries.
#[derive(Clone)]
pub struct HttpThemeRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpThemeRemote {
    /// Creates a remote for the site at `base_url`, e.g. `https://weightwatch.example`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, THEME_ENDPOINT)
    }
}

#[async_trait]
impl ThemeRemote for HttpThemeRemote {
    async fn save(&self, theme: Theme) -> Result<(), ThemeSyncError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&UpdateThemeDto {
                theme: theme.as_str().to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThemeSyncError::Status(status));
        }

        Ok(())
    }
}
