//! AppState - 画面向けの単一の状態と純粋な reducer
//!
//! 状態の更新は必ず [`Action`] 経由で行います（直接のフィールド変更は
//! しない）。[`reduce`] は `(state, action) -> state` の純粋関数で、
//! 隠れた状態を持ちません。適用順はディスパッチ順のままです。

use serde::Serialize;

use crate::domain::{Artifact, ArtifactId};

/// In-memory view of all artifacts plus transient flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    /// Ordered collection, newest first.
    pub signatures: Vec<Artifact>,

    /// True while a generation is in flight.
    pub is_loading: bool,

    /// Last user-visible error message, if any.
    pub error: Option<String>,
}

/// Discrete state transitions (tagged-variant action type).
#[derive(Debug, Clone)]
pub enum Action {
    /// Prepend one artifact to the collection.
    AddSignature(Artifact),

    /// Replace the entire collection (initial load).
    SetSignatures(Vec<Artifact>),

    /// Remove the artifact with the matching id; no-op if absent.
    RemoveSignature(ArtifactId),

    /// Set the loading flag.
    SetLoading(bool),

    /// Set or clear the last error message.
    SetError(Option<String>),
}

/// Pure reducer: produces the next state from the previous one plus a
/// single action.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let AppState {
        mut signatures,
        is_loading,
        error,
    } = state;

    match action {
        Action::AddSignature(artifact) => {
            signatures.insert(0, artifact);
            AppState {
                signatures,
                is_loading,
                error,
            }
        }
        Action::SetSignatures(signatures) => AppState {
            signatures,
            is_loading,
            error,
        },
        Action::RemoveSignature(id) => {
            signatures.retain(|sig| sig.id != id);
            AppState {
                signatures,
                is_loading,
                error,
            }
        }
        Action::SetLoading(is_loading) => AppState {
            signatures,
            is_loading,
            error,
        },
        Action::SetError(error) => AppState {
            signatures,
            is_loading,
            error,
        },
    }
}
