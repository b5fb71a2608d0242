// Persistence for the submitted resume: one JSON document in one named slot.
// No versioning, no history. A new save overwrites the previous resume.

pub mod backend;

use std::sync::Arc;

pub use backend::{FileBackend, KeyValueBackend};
#[cfg(test)]
pub use backend::MemoryBackend;

use crate::errors::AppError;
use crate::models::ResumeDocument;

#[derive(Clone)]
pub struct PersistenceBridge {
    backend: Arc<dyn KeyValueBackend>,
    slot: String,
}

impl PersistenceBridge {
    pub fn new(backend: Arc<dyn KeyValueBackend>, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Serializes `document` and writes it to the slot, replacing whatever was there.
    pub async fn save(&self, document: &ResumeDocument) -> Result<(), AppError> {
        let json = serde_json::to_string(document)?;
        let size = json.len();
        self.backend.set(&self.slot, json).await?;
        tracing::info!(slot = %self.slot, bytes = size, "Resume saved");
        Ok(())
    }

    /// Reads the slot back. `Ok(None)` means nothing has been submitted yet.
    pub async fn load(&self) -> Result<Option<ResumeDocument>, AppError> {
        match self.backend.get(&self.slot).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
