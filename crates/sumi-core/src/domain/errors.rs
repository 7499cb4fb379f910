//! Errors - 生成ライフサイクルのエラー分類
//!
//! [`GenerationError`] は `JobRunner::run` の全ての終端パスを網羅します。
//! どの経路でもこのいずれかの kind で返り、黙って握り潰すことはありません。
//!
//! # 分類
//! - Submission: submit 自体の失敗（リトライしない、即時に表面化）
//! - Failed: プロバイダが確定的な失敗を報告（リトライしない）
//! - Poll: ポーリング中のトランスポート/デコード失敗（即時終了、リトライしない）
//! - Timeout: ポーリング予算の使い切り
//! - Cancelled: ポーリングの合間でのキャンセル

use crate::ports::gateway::GatewayError;

/// Terminal outcome of a failed generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The gateway was unreachable or rejected the submission.
    #[error("failed to submit generation job: {0}")]
    Submission(#[source] GatewayError),

    /// The provider reported a definitive failure for the job.
    #[error("signature generation failed{}", .reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default())]
    Failed { reason: Option<String> },

    /// A poll attempt failed at the transport or decode level.
    ///
    /// Policy: this terminates the run immediately; it neither counts
    /// against nor consumes the remaining attempt budget.
    #[error("failed to poll job status: {0}")]
    Poll(#[source] GatewayError),

    /// The polling budget was exhausted without a terminal status.
    #[error("timed out waiting for signature generation ({attempts} polls)")]
    Timeout { attempts: u32 },

    /// The run was cancelled between poll attempts.
    #[error("generation cancelled")]
    Cancelled,
}
