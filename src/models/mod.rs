//! Data model for the Magick card app.
//!
//! Everything here is a plain serde value: the presentation layer renders
//! these types directly, and the persisted payloads reuse the same derives.

mod card;
mod deck;
mod favorite;

pub use card::{Card, CardType};
pub use deck::Deck;
pub use favorite::{FavoriteRecord, StoredFavorite};
