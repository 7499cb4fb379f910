//! JobGateway port - 生成バックエンドへの薄いプロトコルクライアント
//!
//! ゲートウェイはジョブを投入し、状態を id で照会するだけの存在です。
//! リトライやタイムアウトの判断は一切持ちません（それは
//! [`crate::app::JobRunner`] の仕事）。

use async_trait::async_trait;

use crate::domain::{JobId, JobStatusReport, JobSubmission};

/// Errors surfaced by a gateway implementation.
///
/// Kept free of client-library types so the port stays implementation
/// agnostic; the HTTP impl maps its errors into these.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Transport-level failure (connection refused, DNS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// JobGateway submits generation jobs and reports their status.
///
/// # Contract
/// - `submit` fails the caller on transport errors or non-2xx responses;
///   it never retries.
/// - `poll` returns one status snapshot; interpreting it (terminal or
///   not) is the caller's concern.
#[async_trait]
pub trait JobGateway: Send + Sync {
    /// Submit a composed prompt; returns the provider-assigned job id.
    async fn submit(&self, prompt: &str) -> Result<JobSubmission, GatewayError>;

    /// Fetch the current status of a previously submitted job.
    async fn poll(&self, id: &JobId) -> Result<JobStatusReport, GatewayError>;
}
