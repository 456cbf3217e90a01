//! Addressable question paths derived from schema versions.
//!
//! # Responsibility
//! - Enumerate `sectionId.questionId` paths for one schema version.
//! - Enumerate `formId.formVersion.sectionId.questionId` paths across versions.
//!
//! # Invariants
//! - Exactly one path per `(section, question)` pair present in a version.
//! - Identical full paths from different inputs collapse (set semantics).

use crate::ids::{
    extract_leaf_segment, QuestionPath, SectionQuestionPath, DEFAULT_PATH_DELIMITER,
};
use crate::model::form::FormSchemaVersion;
use log::debug;
use std::collections::BTreeSet;

/// Returns every `sectionId.questionId` path defined by `schema`.
///
/// Returns an empty set when the schema has no sections or no questions.
pub fn extract_paths_from_schema_version(schema: &FormSchemaVersion) -> BTreeSet<String> {
    section_question_paths(schema)
        .map(|path| path.to_string())
        .collect()
}

/// Returns every `formId.formVersion.sectionId.questionId` path across `schemas`.
pub fn extract_paths_from_schema_versions<'a, I>(schemas: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a FormSchemaVersion>,
{
    let mut paths = BTreeSet::new();
    let mut version_count = 0usize;
    for schema in schemas {
        version_count += 1;
        let prefix = format!(
            "{}{d}{}{d}",
            schema.form_id,
            schema.form_version,
            d = DEFAULT_PATH_DELIMITER
        );
        for path in extract_paths_from_schema_version(schema) {
            paths.insert(format!("{prefix}{path}"));
        }
    }
    debug!(
        "event=paths_extracted module=paths status=ok versions={} paths={}",
        version_count,
        paths.len()
    );
    paths
}

/// Typed variant of [`extract_paths_from_schema_versions`].
pub fn question_paths<'a, I>(schemas: I) -> BTreeSet<QuestionPath>
where
    I: IntoIterator<Item = &'a FormSchemaVersion>,
{
    schemas
        .into_iter()
        .flat_map(|schema| {
            section_question_paths(schema).map(move |path| {
                QuestionPath::new(
                    schema.form_id.clone(),
                    schema.form_version,
                    path.section_id,
                    path.question_id,
                )
            })
        })
        .collect()
}

/// Returns the trailing question ID of every dotted path.
///
/// Empty paths are skipped.
pub fn extract_question_ids_from_paths<'a, I>(paths: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    paths
        .into_iter()
        .filter_map(|path| extract_leaf_segment(path, DEFAULT_PATH_DELIMITER))
        .map(str::to_string)
        .collect()
}

/// Returns the highest version of `form_id` among `schemas`.
///
/// Callers supply histories with strictly increasing versions; when two
/// entries share a version the first one wins.
pub fn latest_schema_version<'a, I>(schemas: I, form_id: &str) -> Option<&'a FormSchemaVersion>
where
    I: IntoIterator<Item = &'a FormSchemaVersion>,
{
    schemas
        .into_iter()
        .filter(|schema| schema.form_id == form_id)
        .reduce(|current, schema| {
            if schema.form_version > current.form_version {
                schema
            } else {
                current
            }
        })
}

fn section_question_paths(
    schema: &FormSchemaVersion,
) -> impl Iterator<Item = SectionQuestionPath> + '_ {
    schema.sections.iter().flat_map(|(section_id, section)| {
        section
            .questions
            .keys()
            .map(move |question_id| SectionQuestionPath {
                section_id: section_id.clone(),
                question_id: question_id.clone(),
            })
    })
}
