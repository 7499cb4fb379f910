//! InMemoryArtifactStore - 開発・テスト用のストア
//!
//! Mutex で保護した Vec を新しい順に保ちます。プロセスを跨いで
//! 残らないこと以外は [`super::FileArtifactStore`] と同じ契約です。

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Artifact, ArtifactId};
use crate::ports::{ArtifactStore, StorageError};

/// In-memory implementation of [`ArtifactStore`].
#[derive(Default)]
pub struct InMemoryArtifactStore {
    artifacts: Mutex<Vec<Artifact>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn load(&self) -> Result<Vec<Artifact>, StorageError> {
        Ok(self.artifacts.lock().expect("store lock poisoned").clone())
    }

    async fn save(&self, artifact: &Artifact) -> Result<(), StorageError> {
        self.artifacts
            .lock()
            .expect("store lock poisoned")
            .insert(0, artifact.clone());
        Ok(())
    }

    async fn remove(&self, id: &ArtifactId) -> Result<(), StorageError> {
        self.artifacts
            .lock()
            .expect("store lock poisoned")
            .retain(|a| a.id != *id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.artifacts.lock().expect("store lock poisoned").clear();
        Ok(())
    }
}
