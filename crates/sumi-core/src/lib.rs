//! sumi-core
//!
//! AI 署名画像生成クライアントのコアランタイム。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, artifact, style, job, prompt, errors）
//! - **ports**: 抽象化レイヤー（JobGateway, ArtifactStore, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（JobRunner, AppController, reducer）
//! - **impls**: 実装（HttpJobGateway, FileArtifactStore, InMemoryArtifactStore）
//! - **config**: 環境変数からの設定読み込み

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
