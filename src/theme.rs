//! Theme preference store.
//!
//! Structurally the same as the favorites store but the state is a single
//! scalar: light or dark, persisted as a literal token under its own key.
//! When nothing is stored the host's ambient color scheme is used, and a
//! stored token always wins over the ambient signal.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{KeyValueStorage, StorageError, THEME_KEY};

/// Light or dark presentation theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The persisted token for this mode.
    pub fn as_token(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted token. Anything other than the two literal tokens
    /// is treated as absent by the caller.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The host platform's ambient color scheme.
    pub fn ambient() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => ThemeMode::Dark,
            dark_light::Mode::Light => ThemeMode::Light,
        }
    }
}

/// Persisted light/dark preference with the same optimistic-update policy
/// as the favorites store.
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStorage>,
    mode: ThemeMode,
}

impl ThemeStore {
    /// New store defaulting to the host's ambient scheme until hydrated.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_default(storage, ThemeMode::ambient())
    }

    /// New store with an explicit fallback mode. Tests use this to pin the
    /// ambient signal.
    pub fn with_default(storage: Arc<dyn KeyValueStorage>, fallback: ThemeMode) -> Self {
        Self {
            storage,
            mode: fallback,
        }
    }

    /// Load the stored preference, once, at startup.
    ///
    /// Absent or unparseable tokens keep the fallback; read failures are
    /// logged and keep the fallback, never raised.
    pub async fn hydrate(&mut self) {
        match self.storage.get(THEME_KEY).await {
            Ok(Some(token)) => match ThemeMode::from_token(&token) {
                Some(mode) => {
                    self.mode = mode;
                    debug!(mode = mode.as_token(), "theme loaded");
                }
                None => {
                    warn!(%token, "stored theme token unrecognized, keeping default");
                }
            },
            Ok(None) => {
                debug!(mode = self.mode.as_token(), "no stored theme, using ambient");
            }
            Err(err) => {
                warn!(%err, "theme storage read failed, keeping default");
            }
        }
    }

    /// Current mode. In-memory only, never suspends.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Set the mode and persist it. The in-memory value changes before the
    /// write; on write failure the error is surfaced but the value stands.
    pub async fn set(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.mode = mode;
        self.storage.set(THEME_KEY, mode.as_token()).await?;
        debug!(mode = mode.as_token(), "theme persisted");
        Ok(())
    }

    /// Flip between light and dark, returning the new mode.
    pub async fn toggle(&mut self) -> Result<ThemeMode, StorageError> {
        let next = self.mode.flipped();
        self.set(next).await?;
        Ok(next)
    }
}
