use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::document::StoreDocument;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed record store: one JSON document, re-read from disk on every
/// request and rewritten in full on every mutation. The whole
/// load-mutate-save cycle runs under a single in-process mutex, so two
/// concurrent mutations cannot overwrite each other's update.
pub struct JsonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads fail open: any read or parse error yields the seeded default
    /// document. Callers cannot distinguish an empty system from a corrupt
    /// file.
    async fn load(&self) -> StoreDocument {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(doc) => doc,
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "Unparseable store document, using seeded state");
                    StoreDocument::seeded()
                }
            },
            Err(err) => {
                warn!(path = %self.path.display(), %err, "Failed to read store file, using seeded state");
                StoreDocument::seeded()
            }
        }
    }

    async fn persist(&self, doc: &StoreDocument) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }

    /// Run a read-only projection against the current document.
    pub async fn read<T>(&self, f: impl FnOnce(&StoreDocument) -> T) -> T {
        let _guard = self.lock.lock().await;
        let doc = self.load().await;
        f(&doc)
    }

    /// Run a mutation and persist the whole document. An error from the
    /// closure aborts without writing; a write failure surfaces to the
    /// caller and leaves the file at its pre-request state.
    pub async fn update<T, E>(
        &self,
        f: impl FnOnce(&mut StoreDocument) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await;
        let out = f(&mut doc)?;
        self.persist(&doc).await?;
        Ok(out)
    }
}
