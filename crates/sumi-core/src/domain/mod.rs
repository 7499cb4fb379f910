//! Domain model (IDs, artifacts, styles, jobs, prompt composition).

pub mod artifact;
pub mod errors;
pub mod ids;
pub mod job;
pub mod prompt;
pub mod style;

pub use artifact::Artifact;
pub use errors::GenerationError;
pub use ids::{ArtifactId, JobId};
pub use job::{JobStatus, JobStatusReport, JobSubmission};
pub use prompt::{compose_prompt, validate_prompt, PromptError, MAX_PROMPT_CHARS, PROMPT_MARKER};
pub use style::SignatureStyle;
