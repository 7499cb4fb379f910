//! Job - ゲートウェイ越しの生成ジョブ（非永続）
//!
//! ゲートウェイのレスポンスの形（pass-through shape）をそのまま写した
//! モデルです。submit の応答は status を素の文字列で通し、poll の応答は
//! 閉じた [`JobStatus`] 列挙で解釈します。

use serde::{Deserialize, Serialize};

use super::ids::JobId;

/// Provider job status (closed enumeration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
}

impl JobStatus {
    /// Terminal statuses end the poll loop.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

/// Acknowledgement returned by `submit`.
///
/// `status` is whatever the backend forwarded from the provider at
/// submission time; nothing is decided from it, so it stays a raw string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSubmission {
    pub id: JobId,
    pub status: String,
}

/// One poll response for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusReport {
    pub id: JobId,
    pub status: JobStatus,

    /// Candidate asset URLs; present only on `succeeded`. The first one wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<String>>,

    /// Provider error message; present only on `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobStatusReport {
    /// First output URL, if the job succeeded with a non-empty output list.
    pub fn first_output(&self) -> Option<&str> {
        match self.status {
            JobStatus::Succeeded => self
                .output
                .as_deref()
                .and_then(|urls| urls.first())
                .map(String::as_str),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::starting("starting", JobStatus::Starting)]
    #[case::processing("processing", JobStatus::Processing)]
    #[case::succeeded("succeeded", JobStatus::Succeeded)]
    #[case::failed("failed", JobStatus::Failed)]
    fn status_parses_wire_values(#[case] wire: &str, #[case] expected: JobStatus) {
        let parsed: JobStatus = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn report_tolerates_missing_optional_fields() {
        let report: JobStatusReport =
            serde_json::from_str(r#"{"id":"p1","status":"processing"}"#).unwrap();
        assert_eq!(report.status, JobStatus::Processing);
        assert!(report.output.is_none());
        assert!(report.error.is_none());
        assert!(report.first_output().is_none());
    }

    #[test]
    fn first_output_picks_the_head_of_the_list() {
        let report: JobStatusReport = serde_json::from_str(
            r#"{"id":"p1","status":"succeeded","output":["https://cdn/a.jpg","https://cdn/b.jpg"]}"#,
        )
        .unwrap();
        assert_eq!(report.first_output(), Some("https://cdn/a.jpg"));
    }

    #[test]
    fn first_output_is_none_for_empty_output() {
        let report: JobStatusReport =
            serde_json::from_str(r#"{"id":"p1","status":"succeeded","output":[]}"#).unwrap();
        assert!(report.first_output().is_none());
    }

    #[test]
    fn submission_status_is_passed_through_unparsed() {
        // Replicate-style submit acks can carry statuses outside the poll
        // enumeration; they must not fail deserialization.
        let ack: JobSubmission =
            serde_json::from_str(r#"{"id":"p1","status":"queued"}"#).unwrap();
        assert_eq!(ack.status, "queued");
    }
}
