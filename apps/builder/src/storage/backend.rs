#[cfg(test)]
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
#[cfg(test)]
use tokio::sync::RwLock;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A string key-value store with last-write-wins slots.
///
/// Carried in `PersistenceBridge` as `Arc<dyn KeyValueBackend>`, so the
/// bridge does not care whether values land on disk or stay in memory.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FileBackend: one JSON file per key
// ────────────────────────────────────────────────────────────────────────────

/// One file per key under `dir`. Writes go through a temp file in the same
/// directory and are renamed into place, so a reader never sees half a value.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let dir = self.dir.clone();
        let target = self.path_for(key);
        tokio::task::spawn_blocking(move || write_atomically(&dir, &target, value.as_bytes()))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("storage write task failed: {e}")))?
    }
}

fn write_atomically(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryBackend: in-process map for tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.slots.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_backend_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.get("resumeData").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_backend_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("store");
        let backend = FileBackend::new(&nested);

        backend.set("resumeData", "first".to_string()).await.unwrap();
        backend.set("resumeData", "second".to_string()).await.unwrap();

        assert_eq!(
            backend.get("resumeData").await.unwrap().as_deref(),
            Some("second")
        );
        assert!(backend.path_for("resumeData").exists());
        // Only the slot file remains; the temp file was renamed into place.
        assert_eq!(std::fs::read_dir(&nested).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_memory_backend_slots_are_independent() {
        let backend = MemoryBackend::new();
        backend.set("a", "1".to_string()).await.unwrap();
        backend.set("b", "2".to_string()).await.unwrap();
        assert_eq!(backend.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(backend.get("b").await.unwrap().as_deref(), Some("2"));
        assert!(backend.get("c").await.unwrap().is_none());
    }
}
