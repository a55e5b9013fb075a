//! Favorites store: the single source of truth for which cards are
//! favorited, mirrored to durable storage.
//!
//! The store is optimistic: `toggle` flips the in-memory set before the
//! durable write, so reads issued while a persist is in flight always see
//! the latest logical state. A failed write is reported to the caller but
//! the in-memory flip is kept — a later toggle or the next launch
//! reconciles. Every persist writes the full current snapshot, never a
//! delta, so back-to-back toggles net out to a correct final payload.
//!
//! Hydration is lenient by design: an unreadable backend or a corrupt
//! payload degrades to an empty set with a warning. A broken favorites file
//! must never block using the app.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::models::{Card, FavoriteRecord, StoredFavorite};
use crate::storage::{KeyValueStorage, StorageError, FAVORITES_KEY};

/// Ordered set of favorited card ids, persisted as a JSON snapshot.
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
    records: Vec<FavoriteRecord>,
}

impl FavoritesStore {
    /// New store with an empty in-memory set. Call [`hydrate`] before first
    /// use to load the persisted state.
    ///
    /// [`hydrate`]: FavoritesStore::hydrate
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            records: Vec::new(),
        }
    }

    /// Load the persisted favorites, once, at startup.
    ///
    /// Read failures and malformed payloads fall back to an empty set and
    /// are logged, never raised. Legacy payloads (bare id arrays from early
    /// builds) are upgraded to timestamped records in memory.
    pub async fn hydrate(&mut self) {
        self.records.clear();
        match self.storage.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<StoredFavorite>>(&raw) {
                Ok(stored) => {
                    self.records = stored.into_iter().map(StoredFavorite::into_record).collect();
                    self.drop_duplicate_ids();
                    debug!(count = self.records.len(), "favorites loaded");
                }
                Err(err) => {
                    warn!(%err, "stored favorites unreadable, starting empty");
                }
            },
            Ok(None) => {
                debug!("no stored favorites");
            }
            Err(err) => {
                warn!(%err, "favorites storage read failed, starting empty");
            }
        }
    }

    /// Whether `card_id` is currently favorited. In-memory only, never
    /// suspends.
    pub fn is_favorite(&self, card_id: &str) -> bool {
        self.records.iter().any(|r| r.card_id == card_id)
    }

    /// Flip favorite membership for `card_id` and persist the new snapshot.
    ///
    /// The in-memory flip happens before the write, so `is_favorite`
    /// reflects the change immediately. Returns the new membership state.
    /// On write failure the error is surfaced but the flip stands.
    pub async fn toggle(&mut self, card_id: &str) -> Result<bool, StorageError> {
        let now_favorite = match self.records.iter().position(|r| r.card_id == card_id) {
            Some(index) => {
                self.records.remove(index);
                false
            }
            None => {
                self.records.push(FavoriteRecord::new(card_id));
                true
            }
        };
        self.persist().await?;
        Ok(now_favorite)
    }

    /// The raw records, in the order favorites were added.
    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no cards are favorited.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve favorites to catalog cards, preserving add order.
    ///
    /// Ids that no longer resolve (content retired from the catalog) are
    /// skipped silently; they are orphaned references, not errors.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Card> {
        self.records
            .iter()
            .filter_map(|r| catalog.find_card(&r.card_id))
            .collect()
    }

    /// Write the full current snapshot under [`FAVORITES_KEY`].
    async fn persist(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.records)
            .map_err(|err| StorageError::serialization(FAVORITES_KEY, err))?;
        self.storage.set(FAVORITES_KEY, &payload).await?;
        debug!(count = self.records.len(), "favorites persisted");
        Ok(())
    }

    /// Keep the first record per card id. Persisted payloads written by this
    /// store never contain duplicates, but drifting older builds could.
    fn drop_duplicate_ids(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.records.retain(|r| seen.insert(r.card_id.clone()));
    }
}
