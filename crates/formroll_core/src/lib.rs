//! Core response roll-up logic for versioned forms.
//! This crate is the single source of truth for path, aggregation and
//! projection invariants. Every operation is a pure function of its inputs.

pub mod aggregate;
pub mod ids;
pub mod logging;
pub mod model;
pub mod paths;
pub mod project;

pub use aggregate::flatten::{flatten_submission, FlattenedResponse, FlattenedSubmission};
pub use aggregate::responses::{aggregate_responses, AggregatedResponses, ResponseSet};
pub use ids::{
    extract_leaf_segment, is_entity_identifier, is_form_version_identifier, PathParseError,
    QuestionPath, SectionQuestionPath, DEFAULT_PATH_DELIMITER,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::form::{ComponentType, FormSchemaVersion, Question, Section};
pub use model::submission::{QuestionResponse, Submission};
pub use model::{FormId, FormVersion, QuestionId, ResponseId, SectionId, SubmissionId};
pub use paths::{
    extract_paths_from_schema_version, extract_paths_from_schema_versions,
    extract_question_ids_from_paths, latest_schema_version, question_paths,
};
pub use project::{
    project_all_sections, project_form_responses, project_latest_form_responses,
    project_section_responses, ResponseCollection, SectionResponses,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
