//! Form schema and submission records.
//!
//! # Responsibility
//! - Define the caller-supplied schema tree (form version -> section -> question).
//! - Define the caller-supplied submission tree (submission -> question response).
//!
//! # Invariants
//! - Records are plain data; core code only borrows them.
//! - `questionId` is the only key that is stable across form versions.

pub mod form;
pub mod submission;

/// Stable identifier of a form across all of its versions.
pub type FormId = String;
/// Monotonically increasing version number within one `FormId`.
pub type FormVersion = u32;
/// Section identifier, unique within one installation.
pub type SectionId = String;
/// Question identifier, stable across every version that references it.
pub type QuestionId = String;
/// Identifier of one submission instance.
pub type SubmissionId = String;
/// Identifier of one question-level response.
pub type ResponseId = String;
