//! Error types surfaced by the core.
//!
//! Nothing here is fatal: draw errors tell the caller the requested pool has
//! no cards, and storage errors report a failed persistence round-trip while
//! the in-memory state stays usable.

use thiserror::Error;

pub use crate::storage::StorageError;

/// Errors from the draw engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrawError {
    /// The resolved pool has zero cards. Callers should not offer a draw
    /// affordance for a provably empty pool, but the engine still guards.
    #[error("no cards available to draw from")]
    EmptyPool,

    /// The selector named a deck that is not in the catalog.
    #[error("unknown deck: {0}")]
    UnknownDeck(String),
}
