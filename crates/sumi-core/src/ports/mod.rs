//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部世界（生成バックエンド、ローカルストレージ、時刻、
//! ID 採番）へのインターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - ネットワークは [`JobGateway`] だけが触る
//! - 永続化は [`ArtifactStore`] だけが触る（書き手は論理的に 1 つ）
//! - 時刻と ID はテスト容易性のために trait で差し替え可能

pub mod artifact_store;
pub mod clock;
pub mod gateway;
pub mod id_generator;

pub use self::artifact_store::{ArtifactStore, StorageError};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::gateway::{GatewayError, JobGateway};
pub use self::id_generator::{IdGenerator, UlidGenerator};
