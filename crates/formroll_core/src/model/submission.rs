//! Form submissions and their question-level responses.
//!
//! # Invariants
//! - A submission references exactly one `(form_id, form_version)` pair.
//! - Responses are keyed by question ID inside their owning submission.

use crate::model::{FormId, FormVersion, QuestionId, ResponseId, SubmissionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One text answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub response_text: String,
    pub response_id: ResponseId,
}

impl QuestionResponse {
    pub fn new(response_id: impl Into<ResponseId>, response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            response_id: response_id.into(),
        }
    }
}

/// One respondent's answers to the form version they saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form_id: FormId,
    pub form_version: FormVersion,
    pub submission_id: SubmissionId,
    /// Responses keyed by question ID. Absent on the wire means no responses.
    #[serde(default)]
    pub question_responses: BTreeMap<QuestionId, QuestionResponse>,
}

impl Submission {
    /// Creates a submission without responses.
    pub fn new(
        form_id: impl Into<FormId>,
        form_version: FormVersion,
        submission_id: impl Into<SubmissionId>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            form_version,
            submission_id: submission_id.into(),
            question_responses: BTreeMap::new(),
        }
    }

    /// Adds a response and returns the submission for chained construction.
    pub fn with_response(
        mut self,
        question_id: impl Into<QuestionId>,
        response: QuestionResponse,
    ) -> Self {
        self.question_responses.insert(question_id.into(), response);
        self
    }
}
