use serde::{Deserialize, Serialize};

use super::Card;

/// A named, colored grouping of cards.
///
/// Referential integrity invariant: every contained card's `deck_id` equals
/// this deck's `id`. The built-in catalog is checked for this in tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    /// Unique deck identifier (e.g. "magickmixer").
    pub id: String,
    /// Display name shown on the deck selector.
    pub name: String,
    /// One-line description of the deck's vibe.
    pub description: String,
    /// Hex color used as the deck's accent (e.g. "#FF6B9D").
    pub color: String,
    /// Symbol name the presentation layer maps to a platform icon.
    pub icon: String,
    /// Ordered card content. Order is stable across releases.
    pub cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in this deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards. Draws against an empty deck fail.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
