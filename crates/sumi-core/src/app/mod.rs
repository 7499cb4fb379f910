//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを
//! 実装します。
//!
//! # 主要コンポーネント
//! - **JobRunner**: 生成ジョブの実行ループ（submit→poll→resolve）
//! - **AppController**: 状態のオーナー。reducer 経由の更新と永続化の橋渡し
//! - **reduce / Action / AppState**: 純粋な状態遷移

pub mod controller;
pub mod lifecycle;
pub mod state;

pub use self::controller::{AppController, ControllerError};
pub use self::lifecycle::{CancelHandle, JobRunner, PollPolicy};
pub use self::state::{reduce, Action, AppState};
