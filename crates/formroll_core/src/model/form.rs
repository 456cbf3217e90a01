//! Versioned form schema.
//!
//! # Responsibility
//! - Model one immutable snapshot of a form layout.
//!
//! # Invariants
//! - `(form_id, form_version)` identifies a snapshot; new layouts are new values.
//! - Section membership of a question is per version, never global.

use crate::model::{FormId, FormVersion, QuestionId, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendering kind of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// One page of the form.
    #[default]
    Page,
}

/// Single question prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Display text.
    pub prompt: String,
    /// Opaque type tag, e.g. `text`. Never interpreted by core.
    pub question_type: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, question_type: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            question_type: question_type.into(),
        }
    }
}

/// Grouping of questions inside one schema version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub component_type: ComponentType,
    /// Questions keyed by question ID.
    #[serde(default)]
    pub questions: BTreeMap<QuestionId, Question>,
}

impl Section {
    /// Creates an empty page section.
    pub fn page() -> Self {
        Self::default()
    }

    /// Adds a question and returns the section for chained construction.
    pub fn with_question(mut self, question_id: impl Into<QuestionId>, question: Question) -> Self {
        self.questions.insert(question_id.into(), question);
        self
    }

    /// Returns whether this section lists `question_id`.
    pub fn contains_question(&self, question_id: &str) -> bool {
        self.questions.contains_key(question_id)
    }
}

/// One immutable version of a form layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchemaVersion {
    pub form_id: FormId,
    pub form_version: FormVersion,
    /// Sections keyed by section ID. Absent on the wire means no sections.
    #[serde(default)]
    pub sections: BTreeMap<SectionId, Section>,
}

impl FormSchemaVersion {
    /// Creates a version without sections.
    pub fn new(form_id: impl Into<FormId>, form_version: FormVersion) -> Self {
        Self {
            form_id: form_id.into(),
            form_version,
            sections: BTreeMap::new(),
        }
    }

    /// Adds a section and returns the version for chained construction.
    pub fn with_section(mut self, section_id: impl Into<SectionId>, section: Section) -> Self {
        self.sections.insert(section_id.into(), section);
        self
    }

    /// Returns the section that holds `question_id` in this version, if any.
    pub fn section_of(&self, question_id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(_, section)| section.contains_question(question_id))
            .map(|(section_id, _)| section_id.as_str())
    }
}
