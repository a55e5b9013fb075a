//! Application core for the Magick card-drawing app.
//!
//! Magick is a card game: pick a themed deck, draw a random prompt card,
//! and heart the ones worth keeping. This crate is everything below the
//! presentation layer:
//!
//! - [`catalog`] — the compiled-in deck and card content
//! - [`draw`] — uniform random selection from a deck or the whole catalog
//! - [`favorites`] — the persisted set of favorited card ids
//! - [`theme`] — the persisted light/dark preference
//! - [`storage`] — the async key-value capability both stores persist through
//! - [`app`] — the facade the UI consumes
//!
//! Rendering, animation, and haptics are the shell's concern; it reads data
//! from here and invokes the operations.

pub mod app;
pub mod catalog;
pub mod draw;
pub mod error;
pub mod favorites;
pub mod models;
pub mod settings;
pub mod storage;
pub mod theme;

pub use app::App;
pub use catalog::Catalog;
pub use draw::{draw, draw_card, DeckSelector};
pub use error::{DrawError, StorageError};
pub use favorites::FavoritesStore;
pub use models::{Card, CardType, Deck, FavoriteRecord};
pub use settings::SessionSettings;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use theme::{ThemeMode, ThemeStore};
