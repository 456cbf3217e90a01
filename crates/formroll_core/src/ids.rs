//! Identifier format checks and dotted path addressing.
//!
//! # Responsibility
//! - Cheap shape checks for entity and `formId.formVersion` identifiers.
//! - Leaf extraction and typed parsing of dotted question paths.
//!
//! # Invariants
//! - Shape checks are anchored at the start only; trailing text is tolerated.
//! - Shape checks never fail; malformed input simply returns `false`.

use crate::model::{FormId, FormVersion, QuestionId, SectionId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Segment delimiter used by every dotted path produced in core.
pub const DEFAULT_PATH_DELIMITER: &str = ".";

static ENTITY_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]{8}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{12}")
        .expect("valid entity id regex")
});
static FORM_VERSION_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]{8}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{12}\.[0-9]{1,4}",
    )
    .expect("valid form version id regex")
});

/// Returns whether `input` starts with an 8-4-4-4-12 identifier.
pub fn is_entity_identifier(input: &str) -> bool {
    ENTITY_ID_RE.is_match(input)
}

/// Returns whether `input` starts with `<identifier>.<1-4 digit version>`.
pub fn is_form_version_identifier(input: &str) -> bool {
    FORM_VERSION_ID_RE.is_match(input)
}

/// Returns the last `delimiter`-separated segment of `input`.
///
/// Returns `None` for empty input. Input without the delimiter is returned
/// unchanged. An empty delimiter splits between characters.
pub fn extract_leaf_segment<'a>(input: &'a str, delimiter: &str) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }
    if delimiter.is_empty() {
        return input
            .char_indices()
            .last()
            .map(|(index, _)| &input[index..]);
    }
    input.rsplit(delimiter).next()
}

/// Fully-qualified address of one question inside one form version.
///
/// Renders as `formId.formVersion.sectionId.questionId`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionPath {
    pub form_id: FormId,
    pub form_version: FormVersion,
    pub section_id: SectionId,
    pub question_id: QuestionId,
}

impl QuestionPath {
    pub fn new(
        form_id: impl Into<FormId>,
        form_version: FormVersion,
        section_id: impl Into<SectionId>,
        question_id: impl Into<QuestionId>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            form_version,
            section_id: section_id.into(),
            question_id: question_id.into(),
        }
    }

    /// Drops the form prefix, keeping the `sectionId.questionId` part.
    pub fn section_path(&self) -> SectionQuestionPath {
        SectionQuestionPath {
            section_id: self.section_id.clone(),
            question_id: self.question_id.clone(),
        }
    }
}

impl Display for QuestionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.form_id,
            self.form_version,
            self.section_id,
            self.question_id,
            d = DEFAULT_PATH_DELIMITER
        )
    }
}

impl FromStr for QuestionPath {
    type Err = PathParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = split_segments(value, 4)?;
        let form_version = parts[1]
            .parse::<FormVersion>()
            .map_err(|_| PathParseError::InvalidFormVersion(parts[1].to_string()))?;
        Ok(Self::new(parts[0], form_version, parts[2], parts[3]))
    }
}

/// Address of one question inside one section, without the form prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionQuestionPath {
    pub section_id: SectionId,
    pub question_id: QuestionId,
}

impl Display for SectionQuestionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.section_id, DEFAULT_PATH_DELIMITER, self.question_id
        )
    }
}

impl FromStr for SectionQuestionPath {
    type Err = PathParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = split_segments(value, 2)?;
        Ok(Self {
            section_id: parts[0].to_string(),
            question_id: parts[1].to_string(),
        })
    }
}

const SEGMENT_NAMES: [&str; 4] = ["form_id", "form_version", "section_id", "question_id"];

fn split_segments(value: &str, expected: usize) -> Result<Vec<&str>, PathParseError> {
    if value.trim().is_empty() {
        return Err(PathParseError::Empty);
    }
    let parts: Vec<&str> = value.split(DEFAULT_PATH_DELIMITER).collect();
    if parts.len() != expected {
        return Err(PathParseError::WrongSegmentCount {
            expected,
            found: parts.len(),
        });
    }
    let names = &SEGMENT_NAMES[SEGMENT_NAMES.len() - expected..];
    for (part, name) in parts.iter().zip(names) {
        if part.is_empty() {
            return Err(PathParseError::EmptySegment(name));
        }
    }
    Ok(parts)
}

/// Dotted path parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    Empty,
    WrongSegmentCount { expected: usize, found: usize },
    EmptySegment(&'static str),
    InvalidFormVersion(String),
}

impl Display for PathParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "path must not be empty"),
            Self::WrongSegmentCount { expected, found } => write!(
                f,
                "path has {found} segments, expected {expected}"
            ),
            Self::EmptySegment(name) => write!(f, "path segment `{name}` must not be empty"),
            Self::InvalidFormVersion(value) => {
                write!(f, "path form version is not a number: {value}")
            }
        }
    }
}

impl Error for PathParseError {}
