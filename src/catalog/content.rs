//! Built-in deck content.
//!
//! Content ships compiled into the binary; there is no content download or
//! file load step. Card ids here are permanent — favorite records persisted
//! by released builds reference them.

use crate::models::{Card, CardType, Deck};

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    deck_id: &str,
    card_type: CardType,
    text: &str,
    tags: &[&str],
    mood: &str,
    intensity: u8,
) -> Card {
    Card {
        id: id.to_string(),
        text: text.to_string(),
        card_type,
        deck_id: deck_id.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        mood: Some(mood.to_string()),
        intensity: Some(intensity),
        at_home: Some(true),
    }
}

/// Magick Mixer — social icebreaker deck (21+).
fn magick_mixer() -> Deck {
    let tags = ["social", "fun", "icebreaker", "21+"];
    Deck {
        id: "magickmixer".to_string(),
        name: "Magick Mixer".to_string(),
        description: "Fun icebreaker cards for social gatherings".to_string(),
        color: "#FF6B9D".to_string(),
        icon: "sparkles".to_string(),
        cards: vec![
            card(
                "mixer_1",
                "magickmixer",
                CardType::Question,
                "If you've ever texted an ex after midnight → take 3 sips or do 3 squats.",
                &tags,
                "playful",
                2,
            ),
            card(
                "mixer_2",
                "magickmixer",
                CardType::Question,
                "If you've ever said \"I'm on the way\" while still at home → hop on one leg 3 times.",
                &tags,
                "playful",
                1,
            ),
            card(
                "mixer_3",
                "magickmixer",
                CardType::Question,
                "If you've ever caught feelings you didn't plan for → touch your chest and take a sip.",
                &tags,
                "playful",
                2,
            ),
        ],
    }
}

/// Midnight Magick — date-night deck (18+).
fn midnight_magick() -> Deck {
    Deck {
        id: "datenight".to_string(),
        name: "Midnight Magick".to_string(),
        description: "Intimate prompts for date night".to_string(),
        color: "#8B5CF6".to_string(),
        icon: "moon.stars".to_string(),
        cards: vec![
            card(
                "midnight_1",
                "datenight",
                CardType::Question,
                "Share a fantasy you've never told anyone.",
                &["intimacy", "sensuality", "18+"],
                "intimate",
                3,
            ),
            card(
                "midnight_2",
                "datenight",
                CardType::Question,
                "Describe your ideal romantic evening in detail.",
                &["intimacy", "romance", "18+"],
                "romantic",
                2,
            ),
        ],
    }
}

/// All shipped decks, in presentation order.
pub(super) fn builtin_decks() -> Vec<Deck> {
    vec![magick_mixer(), midnight_magick()]
}
