//! Content catalog: the full set of decks, loaded once and never mutated.
//!
//! Lookup is linear — the catalog holds a handful of decks with a few dozen
//! cards, so there is nothing to index. `all_cards` concatenates decks in
//! catalog order and cards in per-deck order; that order is deterministic
//! across calls, which the draw engine relies on for pool indexing.

mod content;

use once_cell::sync::Lazy;

use crate::models::{Card, Deck};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::new(content::builtin_decks()));

/// Read-only collection of decks for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    decks: Vec<Deck>,
}

impl Catalog {
    /// Build a catalog from an explicit deck list. Used by tests; production
    /// code goes through [`Catalog::builtin`].
    pub fn new(decks: Vec<Deck>) -> Self {
        Self { decks }
    }

    /// The compiled-in catalog, constructed on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All decks, in presentation order.
    pub fn all_decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Look up a deck by id.
    pub fn find_deck(&self, id: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == id)
    }

    /// Look up a card by id across every deck.
    pub fn find_card(&self, id: &str) -> Option<&Card> {
        self.all_cards().find(|c| c.id == id)
    }

    /// Every card, decks in catalog order, cards in per-deck order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.decks.iter().flat_map(|d| d.cards.iter())
    }

    /// Total number of cards across all decks.
    pub fn card_count(&self) -> usize {
        self.decks.iter().map(Deck::len).sum()
    }
}
