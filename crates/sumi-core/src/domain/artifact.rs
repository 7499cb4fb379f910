//! Artifact - 完了した生成の永続レコード
//!
//! Artifact はジョブが成功して初めて作られます（pending な Artifact は
//! 存在しない）。作成後は不変で、変更は delete + 再生成のみです。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ArtifactId;
use super::style::SignatureStyle;

/// 保存時の JSON はオリジナルのレイアウトに合わせて camelCase:
/// `{ id, prompt, imageUrl, createdAt, style? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique, creation-ordered identifier.
    pub id: ArtifactId,

    /// The raw user-supplied prompt (not the composed provider prompt).
    pub prompt: String,

    /// Resolved URL of the generated asset. Known before the record exists.
    pub image_url: String,

    /// Creation timestamp, serialized as ISO-8601.
    pub created_at: DateTime<Utc>,

    /// Optional style tag. Used only for prompt composition at generation
    /// time; kept for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<SignatureStyle>,
}

impl Artifact {
    pub fn new(
        id: ArtifactId,
        prompt: impl Into<String>,
        image_url: impl Into<String>,
        created_at: DateTime<Utc>,
        style: Option<SignatureStyle>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            image_url: image_url.into(),
            created_at,
            style,
        }
    }
}
