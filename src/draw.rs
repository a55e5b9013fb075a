//! Draw engine: pick one card uniformly at random from a pool.
//!
//! The pool is either a single deck's cards or the concatenation of every
//! deck in the catalog. There is no weighting and no memory of previous
//! draws — repeats across draws are expected. The engine is pure apart from
//! consuming entropy; it does no I/O and never blocks.

use rand::Rng;

use crate::catalog::Catalog;
use crate::error::DrawError;
use crate::models::Card;

/// Which pool a draw runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSelector {
    /// Every deck's cards combined.
    AllDecks,
    /// One deck's cards, by deck id.
    Deck(String),
}

impl DeckSelector {
    /// Selector for a single deck.
    pub fn deck(id: impl Into<String>) -> Self {
        DeckSelector::Deck(id.into())
    }
}

/// Draw one card uniformly at random from the selected pool.
///
/// Generic over the RNG so tests can use a seeded `StdRng`; production
/// callers pass `rand::rng()`.
pub fn draw<'a, R: Rng>(
    catalog: &'a Catalog,
    selector: &DeckSelector,
    rng: &mut R,
) -> Result<&'a Card, DrawError> {
    let pool: Vec<&Card> = match selector {
        DeckSelector::AllDecks => catalog.all_cards().collect(),
        DeckSelector::Deck(id) => {
            let deck = catalog
                .find_deck(id)
                .ok_or_else(|| DrawError::UnknownDeck(id.clone()))?;
            deck.cards.iter().collect()
        }
    };

    if pool.is_empty() {
        return Err(DrawError::EmptyPool);
    }

    let index = rng.random_range(0..pool.len());
    Ok(pool[index])
}

/// Draw with the thread-local RNG.
pub fn draw_card<'a>(
    catalog: &'a Catalog,
    selector: &DeckSelector,
) -> Result<&'a Card, DrawError> {
    draw(catalog, selector, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Deck;
    use rand::{rngs::StdRng, SeedableRng};

    fn empty_deck_catalog() -> Catalog {
        Catalog::new(vec![Deck {
            id: "hollow".to_string(),
            name: "Hollow".to_string(),
            description: "A deck with no cards".to_string(),
            color: "#333333".to_string(),
            icon: "questionmark".to_string(),
            cards: Vec::new(),
        }])
    }

    #[test]
    fn test_draw_from_deck_stays_in_deck() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let selector = DeckSelector::deck("magickmixer");
        for _ in 0..100 {
            let card = draw(catalog, &selector, &mut rng).unwrap();
            assert_eq!(card.deck_id, "magickmixer");
        }
    }

    #[test]
    fn test_draw_all_decks_reaches_every_deck() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_decks = std::collections::HashSet::new();
        for _ in 0..200 {
            let card = draw(catalog, &DeckSelector::AllDecks, &mut rng).unwrap();
            seen_decks.insert(card.deck_id.clone());
        }
        assert_eq!(seen_decks.len(), catalog.all_decks().len());
    }

    #[test]
    fn test_draw_unknown_deck_fails() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let err = draw(catalog, &DeckSelector::deck("ghostdeck"), &mut rng).unwrap_err();
        assert_eq!(err, DrawError::UnknownDeck("ghostdeck".to_string()));
    }

    #[test]
    fn test_draw_empty_deck_fails() {
        let catalog = empty_deck_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let err = draw(&catalog, &DeckSelector::deck("hollow"), &mut rng).unwrap_err();
        assert_eq!(err, DrawError::EmptyPool);
    }

    #[test]
    fn test_draw_empty_catalog_fails() {
        let catalog = Catalog::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        let err = draw(&catalog, &DeckSelector::AllDecks, &mut rng).unwrap_err();
        assert_eq!(err, DrawError::EmptyPool);
    }
}
