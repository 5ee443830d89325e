//! Theme preference shared by the server-side user record and the browser client.
//!
//! A preference is one of three tokens: `light`, `dark` or `system`. Only the token is
//! ever persisted. `system` is resolved to a concrete [`ColorScheme`] at apply time using
//! the operating system's reported color-scheme preference.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// Browser storage key holding the current preference token.
pub const THEME_STORAGE_KEY: &str = "theme";

/// A user's theme preference.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete appearance applied to the document. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme '{0}', expected one of light, dark or system")]
pub struct ParseThemeError(pub String);

impl Theme {
    /// Every preference in toggle order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Returns the preference that follows this one when toggling.
    ///
    /// Cycles light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Resolves the preference into the scheme to display.
    ///
    /// # Arguments
    /// - `prefers_dark` - Whether the OS currently reports a dark color-scheme preference
    pub fn resolve(self, prefers_dark: bool) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System if prefers_dark => ColorScheme::Dark,
            Self::System => ColorScheme::Light,
        }
    }

    /// Parses a stored token, falling back to `System` for anything unrecognised.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl ColorScheme {
    /// Class name placed on the document root element.
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Body of `POST /api/settings/theme`.
///
/// The value is kept as a string so unknown tokens can be rejected with a 400 rather than
/// a deserialization rejection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateThemeDto {
    pub theme: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ThemeUpdatedDto {
    pub success: bool,
    pub theme: Theme,
}
