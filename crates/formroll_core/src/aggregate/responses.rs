//! Question-keyed response aggregation across submissions and versions.
//!
//! # Invariants
//! - A question key exists only if at least one submission answered it.
//! - Response sets use full value equality; identical tuples collapse and the
//!   collapse is reported through `log` rather than dropped silently.

use crate::aggregate::flatten::{flatten_submission, FlattenedResponse};
use crate::model::submission::Submission;
use crate::model::QuestionId;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// Set of responses collected for one question.
pub type ResponseSet = BTreeSet<FlattenedResponse>;

/// Multi-valued map from question ID to every response given for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedResponses {
    by_question: BTreeMap<QuestionId, ResponseSet>,
}

impl AggregatedResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one response under `question_id`.
    ///
    /// Returns `false` when an identical response was already present.
    pub fn insert(
        &mut self,
        question_id: impl Into<QuestionId>,
        response: FlattenedResponse,
    ) -> bool {
        self.by_question
            .entry(question_id.into())
            .or_default()
            .insert(response)
    }

    pub fn get(&self, question_id: &str) -> Option<&ResponseSet> {
        self.by_question.get(question_id)
    }

    pub fn contains_question(&self, question_id: &str) -> bool {
        self.by_question.contains_key(question_id)
    }

    /// Number of distinct questions with at least one response.
    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    /// Total number of responses across all questions.
    pub fn response_count(&self) -> usize {
        self.by_question.values().map(BTreeSet::len).sum()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.by_question.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, QuestionId, ResponseSet> {
        self.by_question.iter()
    }

    pub fn into_inner(self) -> BTreeMap<QuestionId, ResponseSet> {
        self.by_question
    }
}

impl<'a> IntoIterator for &'a AggregatedResponses {
    type Item = (&'a QuestionId, &'a ResponseSet);
    type IntoIter = btree_map::Iter<'a, QuestionId, ResponseSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(QuestionId, FlattenedResponse)> for AggregatedResponses {
    fn from_iter<T: IntoIterator<Item = (QuestionId, FlattenedResponse)>>(iter: T) -> Self {
        let mut aggregated = Self::new();
        for (question_id, response) in iter {
            aggregated.insert(question_id, response);
        }
        aggregated
    }
}

/// Merges every submission's responses into one question-keyed map.
///
/// Submissions may reference any mix of form versions. Many responses per
/// question are expected; only fully identical responses collapse.
pub fn aggregate_responses<'a, I>(submissions: I) -> AggregatedResponses
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut aggregated = AggregatedResponses::new();
    let mut submission_count = 0usize;
    let mut collapsed = 0usize;

    for submission in submissions {
        submission_count += 1;
        for (question_id, response) in flatten_submission(submission) {
            if !aggregated.insert(question_id, response) {
                collapsed += 1;
                // Metadata only: response text never reaches the log.
                warn!(
                    "event=response_collapsed module=aggregate status=warn submission_id={}",
                    submission.submission_id
                );
            }
        }
    }

    debug!(
        "event=responses_aggregated module=aggregate status=ok submissions={} questions={} responses={} collapsed={}",
        submission_count,
        aggregated.len(),
        aggregated.response_count(),
        collapsed
    );
    aggregated
}
