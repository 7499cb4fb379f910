//! JobRunner - 生成ジョブの実行ループ
//!
//! 1 回の生成リクエストを submit から終端（URL / エラー）まで駆動します。
//!
//! # フロー
//! 1. JobGateway::submit() で job_id 取得（失敗は即時終了、リトライなし）
//! 2. JobGateway::poll(job_id) を上限回数まで繰り返す
//!    - `succeeded` + output あり → 先頭 URL で成功
//!    - `failed` → 即時終了（プロバイダの確定失敗）
//!    - それ以外 → 固定間隔 sleep して継続
//! 3. 上限到達 → Timeout
//!
//! ストレージには一切触れません。永続化は成功 URL を受け取った
//! [`super::AppController`] の責務です。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::domain::{GenerationError, JobStatus};
use crate::ports::JobGateway;

/// Polling budget for one generation run.
///
/// Defaults match the backend contract: 30 attempts at 2000 ms, roughly
/// a 60 s worst case before [`GenerationError::Timeout`].
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Maximum number of poll attempts before giving up.
    pub max_attempts: u32,

    /// Fixed delay between poll attempts.
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval: Duration::from_millis(2000),
        }
    }
}

/// Handle for cancelling an in-flight run between poll attempts.
///
/// Cancellation is cooperative: the runner checks the flag at the top of
/// every poll iteration, so an in-flight HTTP request is never aborted
/// mid-call. The flag only applies to the run in flight; each new run
/// starts with a cleared flag.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        // ignore send error: the runner may already have finished
        let _ = self.tx.send(true);
    }
}

/// JobRunner drives exactly one generation request at a time from
/// submission to a terminal URL or a typed failure.
///
/// Single-flight is the caller's contract: the runner itself is stateless
/// between runs and does not guard against concurrent `run` calls.
pub struct JobRunner {
    gateway: Arc<dyn JobGateway>,
    policy: PollPolicy,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
}

impl JobRunner {
    pub fn new(gateway: Arc<dyn JobGateway>, policy: PollPolicy) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        Self {
            gateway,
            policy,
            cancel_tx,
            cancel_rx,
        }
    }

    /// Handle that cancels runs of this runner between poll attempts.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            tx: self.cancel_tx.clone(),
        }
    }

    /// Run one generation request to a terminal outcome.
    ///
    /// `prompt` must already be composed and validated (non-empty after
    /// trimming); that is the composing caller's concern.
    ///
    /// Every exit path yields either the resolved URL or one of the
    /// [`GenerationError`] kinds; nothing is swallowed.
    pub async fn run(&self, prompt: &str) -> Result<String, GenerationError> {
        // A cancellation only ever targets the run in flight; clear any
        // stale flag so a cancelled run does not poison the next one.
        self.cancel_tx.send_replace(false);

        let submission = self
            .gateway
            .submit(prompt)
            .await
            .map_err(GenerationError::Submission)?;

        tracing::info!(
            job_id = %submission.id,
            status = %submission.status,
            "submitted generation job"
        );

        for attempt in 1..=self.policy.max_attempts {
            // Cancellation is only observed here, between iterations.
            if *self.cancel_rx.borrow() {
                tracing::info!(job_id = %submission.id, attempt, "generation cancelled");
                return Err(GenerationError::Cancelled);
            }

            let report = self
                .gateway
                .poll(&submission.id)
                .await
                .map_err(GenerationError::Poll)?;

            match report.status {
                JobStatus::Succeeded => {
                    if let Some(url) = report.first_output() {
                        tracing::info!(job_id = %submission.id, attempt, "generation succeeded");
                        return Ok(url.to_string());
                    }
                    // succeeded without output: not terminal yet, keep
                    // polling (matches the provider's eventual-output shape)
                    tracing::warn!(
                        job_id = %submission.id,
                        attempt,
                        "job succeeded but output is empty, continuing to poll"
                    );
                }
                JobStatus::Failed => {
                    tracing::warn!(
                        job_id = %submission.id,
                        attempt,
                        error = report.error.as_deref().unwrap_or("unknown"),
                        "provider reported failure"
                    );
                    return Err(GenerationError::Failed {
                        reason: report.error,
                    });
                }
                JobStatus::Starting | JobStatus::Processing => {
                    tracing::debug!(job_id = %submission.id, attempt, status = ?report.status, "job still running");
                }
            }

            // No sleep after the final attempt: exhaustion is decided
            // right away.
            if attempt < self.policy.max_attempts {
                tokio::time::sleep(self.policy.interval).await;
            }
        }

        Err(GenerationError::Timeout {
            attempts: self.policy.max_attempts,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{report, ScriptedGateway};
    use super::*;
    use crate::domain::JobStatus;
    use crate::ports::GatewayError;
    use std::sync::atomic::Ordering;

    /// Zero interval keeps the loop semantics while letting tests run fast.
    fn instant_policy(max_attempts: u32) -> PollPolicy {
        PollPolicy {
            max_attempts,
            interval: Duration::ZERO,
        }
    }

    fn runner(gateway: Arc<ScriptedGateway>, max_attempts: u32) -> JobRunner {
        JobRunner::new(gateway, instant_policy(max_attempts))
    }

    #[tokio::test]
    async fn first_poll_success_returns_first_output_url() {
        let gateway = Arc::new(ScriptedGateway::accepting(
            "p1",
            vec![Ok(report(
                "p1",
                JobStatus::Succeeded,
                Some(vec!["https://cdn/x.jpg".into(), "https://cdn/y.jpg".into()]),
                None,
            ))],
        ));

        let url = runner(gateway.clone(), 30).run("AISIGNATURE Alex").await.unwrap();

        assert_eq!(url, "https://cdn/x.jpg");
        assert_eq!(gateway.polls_made(), 1);
    }

    #[tokio::test]
    async fn submission_failure_surfaces_without_any_poll() {
        let gateway = Arc::new(ScriptedGateway::new(
            Err(GatewayError::Status { status: 500 }),
            vec![],
        ));

        let err = runner(gateway.clone(), 30).run("AISIGNATURE Alex").await.unwrap_err();

        assert!(matches!(err, GenerationError::Submission(_)));
        assert_eq!(gateway.polls_made(), 0);
        assert_eq!(gateway.submit_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn provider_failure_stops_polling_immediately() {
        // failed on attempt 3: no polls after that
        let gateway = Arc::new(ScriptedGateway::accepting(
            "p1",
            vec![
                Ok(report("p1", JobStatus::Starting, None, None)),
                Ok(report("p1", JobStatus::Processing, None, None)),
                Ok(report(
                    "p1",
                    JobStatus::Failed,
                    None,
                    Some("boom".into()),
                )),
            ],
        ));

        let err = runner(gateway.clone(), 30).run("AISIGNATURE Alex").await.unwrap_err();

        match err {
            GenerationError::Failed { reason } => assert_eq!(reason.as_deref(), Some("boom")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(gateway.polls_made(), 3);
    }

    #[tokio::test]
    async fn exhausted_budget_times_out_after_exactly_max_polls() {
        let polls = (0..30)
            .map(|_| Ok(report("p1", JobStatus::Processing, None, None)))
            .collect();
        let gateway = Arc::new(ScriptedGateway::accepting("p1", polls));

        let err = runner(gateway.clone(), 30).run("AISIGNATURE Alex").await.unwrap_err();

        assert!(matches!(err, GenerationError::Timeout { attempts: 30 }));
        assert_eq!(gateway.polls_made(), 30);
    }

    #[tokio::test]
    async fn poll_transport_error_terminates_the_run() {
        let gateway = Arc::new(ScriptedGateway::accepting(
            "p1",
            vec![
                Ok(report("p1", JobStatus::Processing, None, None)),
                Err(GatewayError::Transport("connection reset".into())),
            ],
        ));

        let err = runner(gateway.clone(), 30).run("AISIGNATURE Alex").await.unwrap_err();

        assert!(matches!(err, GenerationError::Poll(_)));
        assert_eq!(gateway.polls_made(), 2);
    }

    #[tokio::test]
    async fn succeeded_with_empty_output_keeps_polling() {
        let gateway = Arc::new(ScriptedGateway::accepting(
            "p1",
            vec![
                Ok(report("p1", JobStatus::Succeeded, Some(vec![]), None)),
                Ok(report(
                    "p1",
                    JobStatus::Succeeded,
                    Some(vec!["https://cdn/x.jpg".into()]),
                    None,
                )),
            ],
        ));

        let url = runner(gateway.clone(), 30).run("AISIGNATURE Alex").await.unwrap();

        assert_eq!(url, "https://cdn/x.jpg");
        assert_eq!(gateway.polls_made(), 2);
    }

    /// Gateway double that cancels its runner during the first poll; every
    /// later poll succeeds. Lets one double drive a cancelled run and a
    /// successful one on the same runner.
    struct CancelOnFirstPoll {
        handle: std::sync::Mutex<Option<CancelHandle>>,
        polls: std::sync::atomic::AtomicU32,
    }

    impl CancelOnFirstPoll {
        fn new() -> Self {
            Self {
                handle: std::sync::Mutex::new(None),
                polls: std::sync::atomic::AtomicU32::new(0),
            }
        }

        fn arm(&self, handle: CancelHandle) {
            *self.handle.lock().unwrap() = Some(handle);
        }
    }

    #[async_trait::async_trait]
    impl crate::ports::JobGateway for CancelOnFirstPoll {
        async fn submit(
            &self,
            _prompt: &str,
        ) -> Result<crate::domain::JobSubmission, GatewayError> {
            Ok(crate::domain::JobSubmission {
                id: crate::domain::JobId::new("p1"),
                status: "starting".into(),
            })
        }

        async fn poll(
            &self,
            id: &crate::domain::JobId,
        ) -> Result<crate::domain::JobStatusReport, GatewayError> {
            let n = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
            if n == 1 {
                self.handle
                    .lock()
                    .unwrap()
                    .as_ref()
                    .expect("cancel handle not armed")
                    .cancel();
                return Ok(report(id.as_str(), JobStatus::Processing, None, None));
            }
            Ok(report(
                id.as_str(),
                JobStatus::Succeeded,
                Some(vec!["https://cdn/x.jpg".into()]),
                None,
            ))
        }
    }

    #[tokio::test]
    async fn cancellation_short_circuits_before_the_next_poll() {
        let gateway = Arc::new(CancelOnFirstPoll::new());
        let runner = JobRunner::new(gateway.clone(), instant_policy(30));
        gateway.arm(runner.cancel_handle());

        // Cancelled during poll 1; observed at the top of iteration 2.
        let err = runner.run("AISIGNATURE Alex").await.unwrap_err();

        assert!(matches!(err, GenerationError::Cancelled));
        assert_eq!(gateway.polls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn runner_is_usable_again_after_a_cancelled_run() {
        let gateway = Arc::new(CancelOnFirstPoll::new());
        let runner = JobRunner::new(gateway.clone(), instant_policy(30));
        gateway.arm(runner.cancel_handle());

        let err = runner.run("AISIGNATURE Alex").await.unwrap_err();
        assert!(matches!(err, GenerationError::Cancelled));

        // The next run starts with a cleared flag and reaches the gateway.
        let url = runner.run("AISIGNATURE Alex").await.unwrap();
        assert_eq!(url, "https://cdn/x.jpg");
        assert_eq!(gateway.polls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn stale_cancel_before_a_run_does_not_apply_to_it() {
        let gateway = Arc::new(ScriptedGateway::accepting(
            "p1",
            vec![Ok(report(
                "p1",
                JobStatus::Succeeded,
                Some(vec!["https://cdn/x.jpg".into()]),
                None,
            ))],
        ));
        let runner = runner(gateway.clone(), 30);

        // Cancelling with nothing in flight is a no-op for later runs.
        runner.cancel_handle().cancel();
        let url = runner.run("AISIGNATURE Alex").await.unwrap();

        assert_eq!(url, "https://cdn/x.jpg");
        assert_eq!(gateway.polls_made(), 1);
    }
}
