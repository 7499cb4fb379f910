//! AppController - アプリケーション状態の唯一のオーナー
//!
//! JobRunner の結果を ArtifactStore と in-memory 状態へ橋渡しします。
//!
//! # 共有リソースの方針
//! - アーティファクトのコレクションはこのコントローラが排他的に所有
//! - ArtifactStore に触るのもここだけ（書き手は論理的に 1 つ）
//! - 同時に走る生成ジョブは 1 つまで。2 つ目は [`ControllerError::Busy`]
//!   で拒否する（UI 側の無効化だけに頼らない）

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::app::lifecycle::JobRunner;
use crate::app::state::{reduce, Action, AppState};
use crate::domain::prompt::{compose_prompt, validate_prompt, PromptError};
use crate::domain::{Artifact, ArtifactId, GenerationError, SignatureStyle};
use crate::ports::{ArtifactStore, Clock, IdGenerator, StorageError};

/// Failures surfaced by controller operations.
///
/// Each maps to a single user-visible message via `Display`; the same
/// message is what lands in `AppState::error`.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Rejected before any gateway call.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// A generation is already in flight for this controller.
    #[error("a generation is already in progress")]
    Busy,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Single authoritative owner of the artifact list and UI flags.
pub struct AppController {
    state: Mutex<AppState>,
    store: Arc<dyn ArtifactStore>,
    runner: JobRunner,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    in_flight: AtomicBool,
}

impl AppController {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        runner: JobRunner,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: Mutex::new(AppState::default()),
            store,
            runner,
            ids,
            clock,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Apply one action through the reducer.
    async fn dispatch(&self, action: Action) {
        let mut state = self.state.lock().await;
        *state = reduce(std::mem::take(&mut *state), action);
    }

    /// Initial load: replace the in-memory collection with the persisted
    /// one. Storage read failures degrade to an empty list (best-effort,
    /// never surfaced to the user).
    pub async fn load_history(&self) {
        let signatures = match self.store.load().await {
            Ok(signatures) => signatures,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load saved signatures, starting empty");
                Vec::new()
            }
        };
        self.dispatch(Action::SetSignatures(signatures)).await;
    }

    /// Generate a signature for `raw_prompt` and persist the result.
    ///
    /// Validation (`EmptyPrompt` / `TooLong`) and the `Busy` guard reject
    /// before anything is dispatched or sent to the gateway, so
    /// `is_loading` is untouched on those paths. After that, the loading
    /// flag is set for the whole run and released on every exit.
    pub async fn generate_and_store(
        &self,
        raw_prompt: &str,
        style: Option<SignatureStyle>,
    ) -> Result<String, ControllerError> {
        let prompt = validate_prompt(raw_prompt)?.to_string();

        // swap(true) leaves the flag set when another run holds it, which
        // is exactly what Busy means; only the winner clears it below.
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::Busy);
        }

        let result = self.generate_inner(&prompt, style).await;

        if let Err(err) = &result {
            self.dispatch(Action::SetError(Some(err.to_string()))).await;
        }
        // Guaranteed release: runs on success and on every failure kind.
        self.dispatch(Action::SetLoading(false)).await;
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    async fn generate_inner(
        &self,
        prompt: &str,
        style: Option<SignatureStyle>,
    ) -> Result<String, ControllerError> {
        self.dispatch(Action::SetLoading(true)).await;
        self.dispatch(Action::SetError(None)).await;

        let composed = compose_prompt(prompt, style);
        let url = self.runner.run(&composed).await?;

        // The artifact records the raw prompt, not the composed one.
        let artifact = Artifact::new(
            self.ids.generate_artifact_id(),
            prompt,
            &url,
            self.clock.now(),
            style,
        );

        // Persist first, then expose: a failed save never leaves a
        // phantom entry in the in-memory list.
        self.store.save(&artifact).await?;
        self.dispatch(Action::AddSignature(artifact)).await;

        Ok(url)
    }

    /// Remove one artifact from storage and from the in-memory list.
    pub async fn remove(&self, id: ArtifactId) -> Result<(), ControllerError> {
        if let Err(err) = self.store.remove(&id).await {
            self.dispatch(Action::SetError(Some(err.to_string()))).await;
            return Err(err.into());
        }
        self.dispatch(Action::RemoveSignature(id)).await;
        Ok(())
    }

    /// Delete the whole collection. Idempotent.
    pub async fn clear(&self) -> Result<(), ControllerError> {
        if let Err(err) = self.store.clear().await {
            self.dispatch(Action::SetError(Some(err.to_string()))).await;
            return Err(err.into());
        }
        self.dispatch(Action::SetSignatures(Vec::new())).await;
        Ok(())
    }
}
