//! Flattened, provenance-carrying response view.

use crate::model::submission::Submission;
use crate::model::{QuestionId, ResponseId, SubmissionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One response together with the submission it came from.
///
/// Equality covers the full `(submission_id, response_id, response_text)`
/// tuple; two equal values collapse inside a response set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedResponse {
    pub submission_id: SubmissionId,
    pub response_id: ResponseId,
    pub response_text: String,
}

/// Question-keyed view of one submission.
pub type FlattenedSubmission = BTreeMap<QuestionId, FlattenedResponse>;

/// Flattens `submission` into one entry per answered question.
///
/// Returns an empty map for a submission without responses.
pub fn flatten_submission(submission: &Submission) -> FlattenedSubmission {
    submission
        .question_responses
        .iter()
        .map(|(question_id, response)| {
            (
                question_id.clone(),
                FlattenedResponse {
                    submission_id: submission.submission_id.clone(),
                    response_id: response.response_id.clone(),
                    response_text: response.response_text.clone(),
                },
            )
        })
        .collect()
}
