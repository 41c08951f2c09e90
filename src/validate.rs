//! Configuration validation.
//!
//! [`validate_config`] runs every check against a
//! [`TokenizeConfig`](crate::types::TokenizeConfig) and collects all
//! diagnostics into a [`ConfigReport`] — it never short-circuits on the
//! first problem, so users see everything at once. Building a tokenizer
//! arms only the first error; this module is the surface for tooling that
//! wants the full picture.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_tokenize::validate::validate_config;
//!
//! let report = validate_config(&config);
//! if report.has_errors() {
//!     for issue in report.errors() {
//!         eprintln!("{}: {}", issue.path, issue.message);
//!     }
//! }
//! ```

use serde::Serialize;

use crate::errors::IssueCode;
use crate::types::TokenizeConfig;

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding: code, JSON-pointer path, message, and an
/// optional remediation hint.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: IssueCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigIssue {
    fn error(code: IssueCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    fn warning(code: IssueCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Collected diagnostics from validating a configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigReport {
    pub issues: Vec<ConfigIssue>,
}

impl ConfigReport {
    /// Iterate over error-severity issues.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Iterate over warning-severity issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Returns `true` if any issue is an error.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of issues (errors + warnings).
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns `true` if there are no issues at all.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Run every check against `config` and return the collected report.
pub fn validate_config(config: &TokenizeConfig) -> ConfigReport {
    let mut report = ConfigReport::default();

    check_bounds(config, &mut report);
    check_pattern(config, &mut report);
    check_unknown_fields(config, &mut report);

    report
}

// min_length > max_length means the length filter admits nothing.
fn check_bounds(config: &TokenizeConfig, report: &mut ConfigReport) {
    if let Some(max) = config.max_length {
        if config.min_length > max {
            report.issues.push(
                ConfigIssue::error(
                    IssueCode::BoundsConflict,
                    "/min_length",
                    format!(
                        "min_length {} exceeds max_length {max}; no token can satisfy both",
                        config.min_length
                    ),
                )
                .with_hint("Lower min_length, raise max_length, or set max_length to null"),
            );
        } else if max == 0 {
            report.issues.push(
                ConfigIssue::warning(
                    IssueCode::DropsAllTokens,
                    "/max_length",
                    "max_length of 0 drops every token",
                )
                .with_hint("Remove max_length or set it to a positive value"),
            );
        }
    }
}

fn check_pattern(config: &TokenizeConfig, report: &mut ConfigReport) {
    let Some(pattern) = &config.token_pattern else {
        return;
    };
    if let Err(err) = regex::Regex::new(pattern) {
        report.issues.push(
            ConfigIssue::error(
                IssueCode::InvalidPattern,
                "/token_pattern",
                format!("token pattern `{pattern}` failed to compile: {err}"),
            )
            .with_hint("Fix the regex or remove token_pattern to use the default word scan"),
        );
    }
}

// strict → error, non-strict → warning
fn check_unknown_fields(config: &TokenizeConfig, report: &mut ConfigReport) {
    for key in config.unknown_fields.keys() {
        let issue = if config.strict {
            ConfigIssue::error(
                IssueCode::UnknownField,
                format!("/{key}"),
                format!("unrecognized field \"{key}\""),
            )
        } else {
            ConfigIssue::warning(
                IssueCode::UnknownField,
                format!("/{key}"),
                format!("unrecognized field \"{key}\""),
            )
        };
        report.issues.push(issue.with_hint("Check spelling or remove this field"));
    }
}
