use serde::{Deserialize, Serialize};

/// Kind of prompt printed on a card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// A question the player answers out loud.
    Question,
    /// A small action or dare the player performs.
    Mission,
}

/// One unit of displayable content, belonging to exactly one deck.
///
/// Card ids are stable across catalog revisions: favorite records reference
/// cards by id, so a shipped id is never reused for different content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier within the whole catalog (e.g. "mixer_1").
    pub id: String,
    /// The prompt text shown on the card face.
    pub text: String,
    /// Question or mission.
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// Id of the deck this card belongs to.
    #[serde(rename = "deck")]
    pub deck_id: String,
    /// Free-form classification tags ("social", "icebreaker", "21+", ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Mood label used for filtering copy ("playful", "intimate", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Intensity rating from 1 (tame) to 5 (spicy).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<u8>,
    /// Whether the prompt works in a private/at-home setting.
    #[serde(default, rename = "isAtHome", skip_serializing_if = "Option::is_none")]
    pub at_home: Option<bool>,
}
