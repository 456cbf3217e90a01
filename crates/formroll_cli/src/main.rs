//! CLI entry point for inspecting form response roll-ups.
//!
//! # Responsibility
//! - Load a caller-supplied JSON bundle of schema versions and submissions.
//! - Print extracted paths and the projection through one schema version.
//!
//! # Invariants
//! - Output is deterministic for the same bundle (ordered maps and sets).
//! - Failures print a short message to stderr and exit non-zero.

use clap::Parser;
use formroll_core::{
    aggregate_responses, default_log_level, extract_paths_from_schema_versions,
    extract_question_ids_from_paths, init_logging, latest_schema_version, project_form_responses,
    FormSchemaVersion, FormVersion, LoggingError, ResponseCollection, Submission,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "FORMROLL_LOG_LEVEL";

/// Roll up form submissions and view them through one schema version.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "formroll", version)]
struct CliOptions {
    /// JSON bundle with `forms` and `submissions`.
    bundle_path: PathBuf,
    /// Schema version to project through; defaults to the latest version.
    #[arg(long)]
    form_version: Option<FormVersion>,
    /// trace|debug|info|warn|error; used only with `--log-dir`.
    #[arg(long, env = LOG_LEVEL_ENV, default_value = default_log_level())]
    log_level: String,
    /// Absolute directory for rotated log files.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let options = CliOptions::parse();
    match run(&options) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("formroll: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> Result<String, CliError> {
    if let Some(log_dir) = &options.log_dir {
        init_logging(&options.log_level, log_dir)?;
    }

    let bundle = FormBundle::load(&options.bundle_path)?;
    let report = build_report(&bundle, options.form_version)?;
    info!(
        "event=report_built module=cli status=ok forms={} submissions={} paths={}",
        bundle.forms.len(),
        bundle.submissions.len(),
        report.paths.len()
    );
    serde_json::to_string_pretty(&report).map_err(CliError::Encode)
}

/// Input file shape: every known schema version plus the submissions to roll up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct FormBundle {
    #[serde(default)]
    forms: Vec<FormSchemaVersion>,
    #[serde(default)]
    submissions: Vec<Submission>,
}

impl FormBundle {
    fn load(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path).map_err(|err| CliError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|err| CliError::Decode {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    paths: BTreeSet<String>,
    question_ids: BTreeSet<String>,
    projection: Option<ResponseCollection>,
}

fn build_report(
    bundle: &FormBundle,
    form_version: Option<FormVersion>,
) -> Result<Report, CliError> {
    let paths = extract_paths_from_schema_versions(&bundle.forms);
    let question_ids = extract_question_ids_from_paths(&paths);
    let aggregated = aggregate_responses(&bundle.submissions);

    let schema = match (bundle.forms.first(), form_version) {
        (None, _) => None,
        (Some(first), None) => latest_schema_version(&bundle.forms, &first.form_id),
        (Some(first), Some(version)) => Some(
            bundle
                .forms
                .iter()
                .find(|form| form.form_id == first.form_id && form.form_version == version)
                .ok_or(CliError::UnknownFormVersion(version))?,
        ),
    };

    Ok(Report {
        paths,
        question_ids,
        projection: project_form_responses(schema, &aggregated),
    })
}

#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, message: String },
    Decode { path: PathBuf, message: String },
    UnknownFormVersion(FormVersion),
    Logging(LoggingError),
    Encode(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "failed to read `{}`: {message}", path.display())
            }
            Self::Decode { path, message } => {
                write!(f, "invalid bundle `{}`: {message}", path.display())
            }
            Self::UnknownFormVersion(version) => {
                write!(f, "bundle has no form version {version}")
            }
            Self::Logging(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode report: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}
