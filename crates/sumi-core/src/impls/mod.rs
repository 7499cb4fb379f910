//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **HttpJobGateway**: バックエンドプロキシへの reqwest クライアント（本番用）
//! - **FileArtifactStore**: JSON ファイル永続化（本番用）
//! - **InMemoryArtifactStore**: 開発・テスト用のストア

pub mod file_store;
pub mod http_gateway;
pub mod memory_store;

pub use self::file_store::FileArtifactStore;
pub use self::http_gateway::HttpJobGateway;
pub use self::memory_store::InMemoryArtifactStore;
