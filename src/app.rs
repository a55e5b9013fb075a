//! Application facade: the surface the presentation layer talks to.
//!
//! `App` owns the two persisted stores and the session settings, and reads
//! the content catalog. Storage backends are injected at construction —
//! there is no global state; the shell builds one `App`, calls [`App::init`]
//! once, and passes it to whatever needs it.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::draw::{self, DeckSelector};
use crate::error::{DrawError, StorageError};
use crate::favorites::FavoritesStore;
use crate::models::{Card, Deck};
use crate::settings::SessionSettings;
use crate::storage::KeyValueStorage;
use crate::theme::{ThemeMode, ThemeStore};

/// The application core, wired together.
pub struct App {
    catalog: &'static Catalog,
    favorites: FavoritesStore,
    theme: ThemeStore,
    settings: SessionSettings,
}

impl App {
    /// Build the app over the built-in catalog, with both stores sharing
    /// one storage backend (they persist under independent keys).
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            catalog: Catalog::builtin(),
            favorites: FavoritesStore::new(storage.clone()),
            theme: ThemeStore::new(storage),
            settings: SessionSettings::new(),
        }
    }

    /// Hydrate both stores from durable storage. Call once at startup;
    /// failures degrade to defaults and are logged, never raised.
    pub async fn init(&mut self) {
        self.favorites.hydrate().await;
        self.theme.hydrate().await;
    }

    /// All decks for the deck selector, in presentation order.
    pub fn decks(&self) -> &[Deck] {
        self.catalog.all_decks()
    }

    /// The content catalog.
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Draw a random card from a deck, or from all decks combined.
    pub fn draw(&self, selector: &DeckSelector) -> Result<&Card, DrawError> {
        draw::draw_card(self.catalog, selector)
    }

    /// Whether a card is currently favorited.
    pub fn is_favorite(&self, card_id: &str) -> bool {
        self.favorites.is_favorite(card_id)
    }

    /// Toggle a card's favorite state; returns the new state.
    pub async fn toggle_favorite(&mut self, card_id: &str) -> Result<bool, StorageError> {
        self.favorites.toggle(card_id).await
    }

    /// Favorited cards resolved against the catalog, in add order.
    pub fn favorite_cards(&self) -> Vec<&Card> {
        self.favorites.resolve(self.catalog)
    }

    /// Number of favorites (the favorites screen shows a count).
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Current theme mode.
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Set the theme and persist it.
    pub async fn set_theme(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.theme.set(mode).await
    }

    /// Flip the theme, returning the new mode.
    pub async fn toggle_theme(&mut self) -> Result<ThemeMode, StorageError> {
        self.theme.toggle().await
    }

    /// Session settings (read).
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Session settings (write) — the settings screen flips switches here.
    pub fn settings_mut(&mut self) -> &mut SessionSettings {
        &mut self.settings
    }
}
