//! ArtifactStore port - 生成済みアーティファクトの永続化
//!
//! コレクション全体を 1 つの名前空間キーの下に、新しい順の列として
//! 保存します。並行ライターの調整は提供しません。書き手は
//! [`crate::app::AppController`] の 1 つだけという前提です。

use async_trait::async_trait;

use crate::domain::{Artifact, ArtifactId};

/// Errors surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode artifacts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// ArtifactStore persists the ordered artifact collection.
///
/// # Contract
/// - `load` treats a missing key or unreadable content as "no data" and
///   returns an empty list, never an error for those cases.
/// - `save` prepends and rewrites the full sequence; no partial-write
///   state is observable by callers.
/// - `remove` is a no-op (not an error) when the id is absent.
/// - `clear` is idempotent.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Load the full collection, newest first.
    async fn load(&self) -> Result<Vec<Artifact>, StorageError>;

    /// Prepend one artifact and persist the whole sequence.
    async fn save(&self, artifact: &Artifact) -> Result<(), StorageError>;

    /// Remove the artifact with the given id, if present.
    async fn remove(&self, id: &ArtifactId) -> Result<(), StorageError>;

    /// Delete the entire collection.
    async fn clear(&self) -> Result<(), StorageError>;
}
