//! Prompt composition - プロバイダへ送る文字列の組み立て
//!
//! ユーザー入力そのものは Artifact に保存し、プロバイダへは
//! マーカー付きの合成プロンプトを送ります。合成は決定的です:
//! - スタイルあり: `"AISIGNATURE <prompt> <style description>"`
//! - スタイルなし: `"AISIGNATURE <prompt>"`

use super::style::SignatureStyle;

/// Fixed routing marker agreed with the provider-side model.
pub const PROMPT_MARKER: &str = "AISIGNATURE";

/// Maximum accepted prompt length in characters (matches the input field
/// limit of the original client).
pub const MAX_PROMPT_CHARS: usize = 100;

/// Compose the outgoing provider prompt from the raw user text and an
/// optional style.
///
/// The caller is responsible for trimming and validating `prompt` first
/// (see [`validate_prompt`]); composition itself never rejects input.
pub fn compose_prompt(prompt: &str, style: Option<SignatureStyle>) -> String {
    match style {
        Some(style) => format!("{PROMPT_MARKER} {prompt} {}", style.description()),
        None => format!("{PROMPT_MARKER} {prompt}"),
    }
}

/// Reasons a raw prompt is rejected before any gateway call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("prompt is empty")]
    Empty,

    #[error("prompt is too long ({len} chars, max {MAX_PROMPT_CHARS})")]
    TooLong { len: usize },
}

/// Trim and validate raw user text, returning the canonical prompt.
pub fn validate_prompt(raw: &str) -> Result<&str, PromptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PromptError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_PROMPT_CHARS {
        return Err(PromptError::TooLong { len });
    }
    Ok(trimmed)
}
