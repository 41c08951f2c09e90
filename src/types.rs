//! Core configuration and per-call record types.
//!
//! [`TokenizeConfig`] is a plain value object: every field has a default, so
//! it deserializes from as little as `{}`. Unrecognized fields are captured
//! rather than rejected (unless `strict` is set) and surface as validation
//! diagnostics — see [`validate_config`](crate::validate::validate_config).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "min_length": 1,
//!   "max_length": 15,
//!   "remove_stopwords": true,
//!   "alphabetic_only": false,
//!   "token_pattern": null,
//!   "strict": false
//! }
//! ```
//!
//! `max_length` distinguishes *absent* from *null*: an absent field takes the
//! default of [`DEFAULT_MAX_LENGTH`], while an explicit `null` disables the
//! upper bound entirely.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default upper bound on token length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 15;

fn default_min_length() -> usize {
    1
}

fn default_max_length() -> Option<usize> {
    Some(DEFAULT_MAX_LENGTH)
}

/// Configuration for [`WordTokenizer`](crate::tokenize::word::WordTokenizer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizeConfig {
    /// Tokens shorter than this many characters are dropped.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Tokens longer than this many characters are dropped; `None` disables
    /// the bound.
    #[serde(default = "default_max_length")]
    pub max_length: Option<usize>,

    /// Drop tokens present in the tokenizer's stoplist.
    #[serde(default)]
    pub remove_stopwords: bool,

    /// Treat digits as separators too, so tokens are purely alphabetic.
    #[serde(default)]
    pub alphabetic_only: bool,

    /// Custom token regex. When set, tokens are the non-empty matches of
    /// this pattern against the lowercased text (the length and stop-word
    /// filters still apply). When unset, tokens are runs of word characters.
    #[serde(default)]
    pub token_pattern: Option<String>,

    /// If `true`, unrecognized fields are faults; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            remove_stopwords: false,
            alphabetic_only: false,
            token_pattern: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl TokenizeConfig {
    /// Create a config with the defaults (min length 1, max length
    /// [`DEFAULT_MAX_LENGTH`], no stop-word removal).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum token length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the maximum token length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Remove the upper bound on token length.
    pub fn with_unlimited_length(mut self) -> Self {
        self.max_length = None;
        self
    }

    /// Enable or disable stop-word removal.
    pub fn with_remove_stopwords(mut self, remove_stopwords: bool) -> Self {
        self.remove_stopwords = remove_stopwords;
        self
    }

    /// Enable or disable the alphabetic-only scan.
    pub fn with_alphabetic_only(mut self, alphabetic_only: bool) -> Self {
        self.alphabetic_only = alphabetic_only;
        self
    }

    /// Set a custom token pattern.
    pub fn with_token_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.token_pattern = Some(pattern.into());
        self
    }

    /// Enable or disable strict handling of unrecognized fields.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Why a call produced no tokens without reaching the split stage.
///
/// Both variants are normal outcomes, not faults: absent and blank input are
/// expected in real corpora and degrade silently to an empty token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInput {
    /// No text was supplied at all.
    Missing,
    /// Text was empty or whitespace-only after trimming.
    Blank,
}

impl EmptyInput {
    /// Returns the snake_case name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Blank => "blank",
        }
    }
}

impl fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call counters describing what a tokenizer pass produced.
///
/// Invariant: `candidates == kept + dropped_by_length + dropped_stopwords`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenizeReport {
    /// Candidates produced by the split, before any filtering.
    pub candidates: usize,
    /// Tokens that survived every filter.
    pub kept: usize,
    /// Candidates dropped by the length bounds.
    pub dropped_by_length: usize,
    /// Candidates dropped by the stoplist.
    pub dropped_stopwords: usize,
}
