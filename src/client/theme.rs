//! Theme preference state machine.
//!
//! Storage always holds the preference token and is written before the display changes.
//! `system` is resolved through [`ColorSchemeQuery`] each time it is applied. Saving to
//! the server is best-effort: a failed save is logged and local state is kept.

use async_trait::async_trait;

use crate::{
    client::error::ThemeSyncError,
    model::theme::{ColorScheme, Theme},
};

/// Persistent client-side storage for the preference, keyed by
/// [`THEME_STORAGE_KEY`](crate::model::theme::THEME_STORAGE_KEY) in browsers.
pub trait ThemeStorage {
    /// Raw stored token, if any.
    fn get(&self) -> Option<String>;
    fn set(&mut self, theme: Theme);
}

/// The element whose class reflects the applied scheme.
pub trait ThemeDisplay {
    /// Removes any previous scheme class and adds `scheme`'s.
    fn apply(&mut self, scheme: ColorScheme);
}

/// The operating system's color-scheme preference.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// Server endpoint that persists the preference on the user record.
#[async_trait]
pub trait ThemeRemote: Send + Sync {
    async fn save(&self, theme: Theme) -> Result<(), ThemeSyncError>;
}

pub struct ThemeSync<S, D, C, R> {
    storage: S,
    display: D,
    scheme: C,
    remote: R,
    /// Value of the page's theme selector, when the page has one.
    selected: Option<Theme>,
}

impl<S, D, C, R> ThemeSync<S, D, C, R>
where
    S: ThemeStorage,
    D: ThemeDisplay,
    C: ColorSchemeQuery,
    R: ThemeRemote,
{
    pub fn new(storage: S, display: D, scheme: C, remote: R) -> Self {
        Self {
            storage,
            display,
            scheme,
            remote,
            selected: None,
        }
    }

    /// Applies the initial preference on page load.
    ///
    /// Precedence is the server-rendered preference, then storage, then `system`. Storage
    /// is seeded with the initial value only when it is empty.
    ///
    /// # Arguments
    /// - `server_preference` - Preference rendered into the page for a logged-in user
    ///
    /// # Returns
    /// The applied preference
    pub fn initialize(&mut self, server_preference: Option<Theme>) -> Theme {
        let stored = self.stored();
        let initial = server_preference.or(stored).unwrap_or_default();

        if stored.is_none() {
            self.storage.set(initial);
        }
        self.selected = server_preference;
        self.apply(initial);

        initial
    }

    /// Advances the stored preference one step (light → dark → system → light).
    ///
    /// # Returns
    /// The new preference
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().next();

        self.storage.set(next);
        if self.selected.is_some() {
            self.selected = Some(next);
        }
        self.apply(next);

        next
    }

    /// Toggles locally, then saves the new preference on the server.
    ///
    /// A failed save is logged and never reverts the local change.
    pub async fn toggle_and_sync(&mut self) -> Theme {
        let next = self.toggle();

        if let Err(e) = self.remote.save(next).await {
            tracing::error!("Failed to save theme preference to server: {}", e);
        }

        next
    }

    /// Handles a change of the page's theme selector. Does not contact the server.
    pub fn select(&mut self, theme: Theme) {
        self.storage.set(theme);
        self.selected = Some(theme);
        self.apply(theme);
    }

    /// Handles a change of the OS color-scheme preference.
    ///
    /// # Returns
    /// `true` when the display was re-applied, which only happens while the effective
    /// preference is `system`. The selector value takes precedence over storage.
    pub fn on_system_scheme_change(&mut self) -> bool {
        let follows_system = self.effective() == Theme::System;

        if follows_system {
            self.apply(Theme::System);
        }

        follows_system
    }

    /// Stored preference, `system` when storage is empty.
    pub fn current(&self) -> Theme {
        self.stored().unwrap_or_default()
    }

    /// Preference currently shown: the selector value when set, else storage.
    fn effective(&self) -> Theme {
        self.selected.or(self.stored()).unwrap_or_default()
    }

    fn stored(&self) -> Option<Theme> {
        self.storage.get().map(|value| Theme::from_stored(&value))
    }

    fn apply(&mut self, theme: Theme) {
        let scheme = theme.resolve(self.scheme.prefers_dark());
        self.display.apply(scheme);
    }
}
