use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A favorited card, tracked by id so catalog content is never duplicated
/// into the persisted payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    /// Id of the favorited card.
    pub card_id: String,
    /// When the card was favorited. Persisted as integer milliseconds
    /// since epoch, matching the payload the mobile builds wrote.
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Record a favorite added right now.
    pub fn new(card_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            added_at: Utc::now(),
        }
    }
}

/// One entry of a persisted favorites payload.
///
/// Early builds stored favorites as a plain array of card ids; later builds
/// store timestamped records. Loading accepts both shapes, saving always
/// writes records, so a legacy payload is upgraded on the first persist
/// after hydration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredFavorite {
    Record(FavoriteRecord),
    LegacyId(String),
}

impl StoredFavorite {
    /// Upgrade to the canonical record shape. Legacy bare ids get the
    /// current time, since the original add time was never stored.
    pub fn into_record(self) -> FavoriteRecord {
        match self {
            StoredFavorite::Record(record) => record,
            StoredFavorite::LegacyId(card_id) => FavoriteRecord::new(card_id),
        }
    }
}
