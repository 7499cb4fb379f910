//! HttpJobGateway - バックエンドプロキシへの HTTP クライアント
//!
//! バックエンドの surface をそのまま話します:
//! - `POST {base}/api/signature/generate`、ボディ `{ "prompt": ... }`
//! - `GET  {base}/api/signature/status/{id}`
//! - `GET  {base}/health`（供給確認用）
//!
//! リトライ・ポーリング判断は持ちません。1 リクエスト 1 レスポンスの
//! 薄い変換だけです。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{JobId, JobStatusReport, JobSubmission};
use crate::ports::{GatewayError, JobGateway};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP implementation of [`JobGateway`] against the signature backend.
pub struct HttpJobGateway {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpJobGateway {
    /// Create a gateway for `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a gateway with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Probe the backend health endpoint (`GET /health`).
    pub async fn health(&self) -> Result<(), GatewayError> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        tracing::debug!(status = %health.status, "backend health probe ok");
        Ok(())
    }

    async fn decode_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl JobGateway for HttpJobGateway {
    async fn submit(&self, prompt: &str) -> Result<JobSubmission, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("api/signature/generate"))
            .timeout(self.timeout)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let submission: JobSubmission = Self::decode_json(response).await?;
        tracing::debug!(job_id = %submission.id, "submitted job to backend");
        Ok(submission)
    }

    async fn poll(&self, id: &JobId) -> Result<JobStatusReport, GatewayError> {
        let response = self
            .client
            .get(self.endpoint(&format!("api/signature/status/{id}")))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::decode_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let gateway = HttpJobGateway::new("http://localhost:8080/");
        assert_eq!(
            gateway.endpoint("api/signature/generate"),
            "http://localhost:8080/api/signature/generate"
        );

        let gateway = HttpJobGateway::new("http://localhost:8080");
        assert_eq!(gateway.endpoint("health"), "http://localhost:8080/health");
    }

    #[test]
    fn status_path_embeds_the_job_id() {
        let gateway = HttpJobGateway::new("http://localhost:8080");
        let id = JobId::new("p1");
        assert_eq!(
            gateway.endpoint(&format!("api/signature/status/{id}")),
            "http://localhost:8080/api/signature/status/p1"
        );
    }

    /// One-shot HTTP listener that answers every accepted connection with
    /// the canned response, then closes it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn health_resolves_ok_against_a_200_response() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"status":"OK"}"#).await;
        let gateway = HttpJobGateway::new(base);

        gateway.health().await.unwrap();
    }

    #[tokio::test]
    async fn health_surfaces_a_non_success_status() {
        let base = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
        let gateway = HttpJobGateway::new(base);

        let err = gateway.health().await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn health_rejects_a_body_without_the_expected_shape() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"unexpected":true}"#).await;
        let gateway = HttpJobGateway::new(base);

        let err = gateway.health().await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }
}
