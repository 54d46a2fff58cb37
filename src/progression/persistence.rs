//! Progress persistence contract.
//!
//! The engine only asks a `ProgressStore` to save after a victory and to
//! hand back saved progress. Where the bytes live is the store's business.
//! `MemoryStore` keeps one bincode-encoded `SaveRecord` in memory.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::profile::{Progress, PROGRESS_VERSION};

/// Storage backend for player progress.
pub trait ProgressStore {
    /// Persist `progress`. Returns whether it was stored.
    fn save_progress(&mut self, progress: &Progress) -> bool;

    /// The last saved progress, if any can be read back.
    fn load_progress(&self) -> Option<Progress>;
}

impl<T: ProgressStore + ?Sized> ProgressStore for &mut T {
    fn save_progress(&mut self, progress: &Progress) -> bool {
        (**self).save_progress(progress)
    }

    fn load_progress(&self) -> Option<Progress> {
        (**self).load_progress()
    }
}

/// Errors while encoding or decoding a save.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("save version {found} does not match {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Versioned save envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub progress: Progress,
}

impl SaveRecord {
    #[must_use]
    pub fn new(progress: Progress) -> Self {
        Self {
            version: PROGRESS_VERSION,
            progress,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, PersistenceError> {
        bincode::serialize(self).map_err(|e| PersistenceError::Serialization(e.to_string()))
    }

    /// Decode a record, rejecting other save versions.
    pub fn decode(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let record: SaveRecord =
            bincode::deserialize(bytes).map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        if record.version != PROGRESS_VERSION {
            return Err(PersistenceError::VersionMismatch {
                found: record.version,
                expected: PROGRESS_VERSION,
            });
        }
        Ok(record)
    }
}

/// In-memory store holding the latest encoded save.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
    saves: u32,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> u32 {
        self.saves
    }

    /// The raw encoded save, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl ProgressStore for MemoryStore {
    fn save_progress(&mut self, progress: &Progress) -> bool {
        match SaveRecord::new(progress.clone()).encode() {
            Ok(bytes) => {
                debug!(len = bytes.len(), "progress saved");
                self.bytes = Some(bytes);
                self.saves += 1;
                true
            }
            Err(err) => {
                warn!(%err, "failed to encode progress");
                false
            }
        }
    }

    fn load_progress(&self) -> Option<Progress> {
        let bytes = self.bytes.as_deref()?;
        match SaveRecord::decode(bytes) {
            Ok(record) => Some(record.progress),
            Err(err) => {
                warn!(%err, "failed to decode saved progress");
                None
            }
        }
    }
}
