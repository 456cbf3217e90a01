//! Re-projection of aggregated responses onto a chosen schema version.
//!
//! # Responsibility
//! - Slice a question-keyed response map into the section layout of one
//!   schema version, whichever version produced the responses.
//!
//! # Invariants
//! - Every section of the schema appears in the result, possibly empty.
//! - A section never gains a question it does not list.
//! - Questions without responses are omitted, not mapped to empty sets.
//! - `None` means "cannot project"; an empty map means "no data".

use crate::aggregate::responses::{AggregatedResponses, ResponseSet};
use crate::model::form::{FormSchemaVersion, Section};
use crate::model::{FormId, FormVersion, QuestionId, SectionId};
use crate::paths::latest_schema_version;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Responses of one section, keyed by question ID.
pub type SectionResponses = BTreeMap<QuestionId, ResponseSet>;

/// Aggregated responses viewed through one schema version.
///
/// `form_id`/`form_version` name the schema used for projection, not the
/// versions the responses were submitted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCollection {
    pub form_id: FormId,
    pub form_version: FormVersion,
    pub sections: BTreeMap<SectionId, SectionResponses>,
}

impl ResponseCollection {
    pub fn section(&self, section_id: &str) -> Option<&SectionResponses> {
        self.sections.get(section_id)
    }

    /// Responses for one question inside one section of this layout.
    pub fn responses_for(&self, section_id: &str, question_id: &str) -> Option<&ResponseSet> {
        self.sections
            .get(section_id)
            .and_then(|section| section.get(question_id))
    }

    /// Total number of responses across all sections.
    pub fn response_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(BTreeMap::values)
            .map(ResponseSet::len)
            .sum()
    }
}

/// Returns the responses for the questions `section` lists.
pub fn project_section_responses(
    section: &Section,
    aggregated: &AggregatedResponses,
) -> SectionResponses {
    section
        .questions
        .keys()
        .filter_map(|question_id| {
            aggregated
                .get(question_id)
                .map(|responses| (question_id.clone(), responses.clone()))
        })
        .collect()
}

/// Projects `aggregated` onto every section of `schema`.
pub fn project_all_sections(
    schema: &FormSchemaVersion,
    aggregated: &AggregatedResponses,
) -> BTreeMap<SectionId, SectionResponses> {
    schema
        .sections
        .iter()
        .map(|(section_id, section)| {
            (
                section_id.clone(),
                project_section_responses(section, aggregated),
            )
        })
        .collect()
}

/// Views `aggregated` through `schema`.
///
/// Returns `None` when `schema` is absent or `aggregated` is empty. The
/// schema may be a version that produced none of the responses.
pub fn project_form_responses(
    schema: Option<&FormSchemaVersion>,
    aggregated: &AggregatedResponses,
) -> Option<ResponseCollection> {
    let schema = schema?;
    if aggregated.is_empty() {
        debug!(
            "event=projection_skipped module=project status=empty form_id={} form_version={}",
            schema.form_id, schema.form_version
        );
        return None;
    }

    let sections = project_all_sections(schema, aggregated);
    let collection = ResponseCollection {
        form_id: schema.form_id.clone(),
        form_version: schema.form_version,
        sections,
    };
    debug!(
        "event=projection_built module=project status=ok form_id={} form_version={} sections={} responses={}",
        collection.form_id,
        collection.form_version,
        collection.sections.len(),
        collection.response_count()
    );
    Some(collection)
}

/// Views `aggregated` through the latest version of `form_id` in `schemas`.
pub fn project_latest_form_responses<'a, I>(
    schemas: I,
    form_id: &str,
    aggregated: &AggregatedResponses,
) -> Option<ResponseCollection>
where
    I: IntoIterator<Item = &'a FormSchemaVersion>,
{
    project_form_responses(latest_schema_version(schemas, form_id), aggregated)
}
