//! FileArtifactStore - JSON ファイルによる永続化
//!
//! コレクション全体を 1 つの JSON 配列（新しい順）として保存します。
//! 書き込みは temp ファイル + rename なので、読み手から中途半端な
//! 状態は見えません。
//!
//! # 読み込みの方針
//! ファイルが無い・中身が読めない場合は「データなし」として空列を
//! 返します（エラーにしない）。オリジナルのクライアントのストレージ
//! 層と同じ振る舞いです。

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{Artifact, ArtifactId};
use crate::ports::{ArtifactStore, StorageError};

/// File-backed implementation of [`ArtifactStore`].
pub struct FileArtifactStore {
    path: PathBuf,
}

impl FileArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> Result<Vec<Artifact>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable store file, treating as empty");
                return Ok(Vec::new());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(artifacts) => Ok(artifacts),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "corrupt store file, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, artifacts: &[Artifact]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(artifacts)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // temp + rename keeps the visible file whole at all times
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ArtifactStore for FileArtifactStore {
    async fn load(&self) -> Result<Vec<Artifact>, StorageError> {
        self.read_all().await
    }

    async fn save(&self, artifact: &Artifact) -> Result<(), StorageError> {
        let mut artifacts = self.read_all().await?;
        artifacts.insert(0, artifact.clone());
        self.write_all(&artifacts).await
    }

    async fn remove(&self, id: &ArtifactId) -> Result<(), StorageError> {
        let artifacts = self.read_all().await?;
        if artifacts.is_empty() {
            return Ok(());
        }
        let remaining: Vec<Artifact> = artifacts.into_iter().filter(|a| a.id != *id).collect();
        self.write_all(&remaining).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
