//! Word-level tokenizer.
//!
//! [`WordTokenizer`] turns raw text into an ordered list of lowercase word
//! tokens: lowercase the text, split on runs of non-word characters (or
//! match a custom pattern), drop candidates outside the configured length
//! bounds, and optionally drop stop words.
//!
//! # Never fails
//!
//! `tokenize` returns `Vec<String>`, not a `Result`. Missing or blank input
//! is a normal outcome and yields an empty list. A configuration the
//! tokenizer cannot honor (conflicting bounds, a pattern that does not
//! compile, a strict-mode unknown field) is detected at construction and
//! *armed*: every call reports the fault through the observer and yields an
//! empty list. Callers that want the failure eagerly use [`try_new`].
//!
//! # Example
//!
//! ```rust,ignore
//! use rapid_tokenize::{TokenizeConfig, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new(
//!     TokenizeConfig::new().with_remove_stopwords(true),
//! );
//! let tokens = tokenizer.tokenize("This is a sentence.");
//! assert_eq!(tokens, vec!["sentence"]);
//! ```
//!
//! [`try_new`]: WordTokenizer::try_new

use rayon::prelude::*;
use regex::Regex;

use crate::errors::TokenizeFault;
use crate::observer::{NoopObserver, TokenizeObserver};
use crate::stopwords::Stoplist;
use crate::types::{EmptyInput, TokenizeConfig, TokenizeReport};

/// Batch size below which `tokenize_batch` stays sequential.
const PARALLEL_THRESHOLD: usize = 32;

/// A compiled word tokenizer. Immutable after construction, so a single
/// instance can serve concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    min_length: usize,
    max_length: Option<usize>,
    remove_stopwords: bool,
    alphabetic_only: bool,
    pattern: Option<Regex>,
    stoplist: Stoplist,
    fault: Option<TokenizeFault>,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(TokenizeConfig::default())
    }
}

impl WordTokenizer {
    /// Compile `config` into a tokenizer. Infallible: a rejected
    /// configuration arms a fault instead of returning an error, and every
    /// subsequent call reports it through the observer while returning an
    /// empty token list.
    ///
    /// The stoplist defaults to the built-in English list when
    /// `remove_stopwords` is set; inject another with [`with_stoplist`].
    ///
    /// [`with_stoplist`]: WordTokenizer::with_stoplist
    pub fn new(config: TokenizeConfig) -> Self {
        let (pattern, fault) = match Self::compile(&config) {
            Ok(pattern) => (pattern, None),
            Err(fault) => (None, Some(fault)),
        };

        let stoplist = if config.remove_stopwords {
            Stoplist::english()
        } else {
            Stoplist::empty()
        };

        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            remove_stopwords: config.remove_stopwords,
            alphabetic_only: config.alphabetic_only,
            pattern,
            stoplist,
            fault,
        }
    }

    /// Compile `config`, returning the first fault eagerly instead of
    /// arming it.
    pub fn try_new(config: TokenizeConfig) -> Result<Self, TokenizeFault> {
        let tokenizer = Self::new(config);
        match tokenizer.fault {
            Some(fault) => Err(fault),
            None => Ok(tokenizer),
        }
    }

    /// Replace the stoplist. Only consulted when the configuration set
    /// `remove_stopwords`.
    pub fn with_stoplist(mut self, stoplist: Stoplist) -> Self {
        self.stoplist = stoplist;
        self
    }

    /// The armed configuration fault, if any.
    pub fn fault(&self) -> Option<&TokenizeFault> {
        self.fault.as_ref()
    }

    /// Tokenize `text` with no observer.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_observed(Some(text), &mut NoopObserver)
    }

    /// Tokenize possibly-absent text with no observer. `None` yields an
    /// empty list, same as blank text.
    pub fn tokenize_opt(&self, text: Option<&str>) -> Vec<String> {
        self.tokenize_observed(text, &mut NoopObserver)
    }

    /// Tokenize with per-call telemetry. The observer receives exactly one
    /// callback: the pass counters, an empty-input notice, or the armed
    /// fault.
    pub fn tokenize_observed(
        &self,
        text: Option<&str>,
        observer: &mut impl TokenizeObserver,
    ) -> Vec<String> {
        if let Some(fault) = &self.fault {
            observer.on_fault(fault);
            return Vec::new();
        }

        let Some(text) = text else {
            observer.on_empty_input(EmptyInput::Missing);
            return Vec::new();
        };

        if text.trim().is_empty() {
            observer.on_empty_input(EmptyInput::Blank);
            return Vec::new();
        }

        self.pass(text, observer)
    }

    /// Tokenize a batch of documents, preserving order. Sequential below
    /// [`PARALLEL_THRESHOLD`] documents, parallel across documents above it.
    ///
    /// Observers are not threaded through the parallel path; batch callers
    /// that need telemetry use per-call [`tokenize_observed`].
    ///
    /// [`tokenize_observed`]: WordTokenizer::tokenize_observed
    pub fn tokenize_batch(&self, texts: &[&str]) -> Vec<Vec<String>> {
        // For small batches, sequential is faster
        if texts.len() < PARALLEL_THRESHOLD {
            return texts.iter().map(|t| self.tokenize(t)).collect();
        }

        texts.par_iter().map(|t| self.tokenize(t)).collect()
    }

    /// Detect configuration faults and compile the custom pattern. Checks
    /// run in a fixed order so `new` and `try_new` agree on which fault is
    /// surfaced first.
    fn compile(config: &TokenizeConfig) -> Result<Option<Regex>, TokenizeFault> {
        if let Some(max) = config.max_length {
            if config.min_length > max {
                return Err(TokenizeFault::BoundsConflict {
                    min: config.min_length,
                    max,
                });
            }
        }

        if config.strict {
            if let Some(field) = config.unknown_fields.keys().min() {
                return Err(TokenizeFault::UnknownField {
                    field: field.clone(),
                });
            }
        }

        match &config.token_pattern {
            Some(pattern) => match Regex::new(pattern) {
                Ok(re) => Ok(Some(re)),
                Err(err) => Err(TokenizeFault::InvalidPattern {
                    pattern: pattern.clone(),
                    detail: err.to_string(),
                }),
            },
            None => Ok(None),
        }
    }

    /// One full pass over non-blank text.
    fn pass(&self, text: &str, observer: &mut impl TokenizeObserver) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut report = TokenizeReport::default();
        let mut kept = Vec::new();

        match &self.pattern {
            Some(re) => {
                for found in re.find_iter(&lowered) {
                    if !found.as_str().is_empty() {
                        self.keep_or_drop(found.as_str(), &mut kept, &mut report);
                    }
                }
            }
            None => {
                // Runs of non-word characters act as separators; split
                // leaves empty slices between adjacent separators.
                let is_separator: fn(char) -> bool = if self.alphabetic_only {
                    |c| !c.is_alphabetic()
                } else {
                    |c| !c.is_alphanumeric()
                };
                for candidate in lowered.split(is_separator).filter(|s| !s.is_empty()) {
                    self.keep_or_drop(candidate, &mut kept, &mut report);
                }
            }
        }

        report.kept = kept.len();
        observer.on_tokens(&report);
        kept
    }

    /// Apply the length bounds and the stoplist to one candidate.
    fn keep_or_drop(&self, candidate: &str, kept: &mut Vec<String>, report: &mut TokenizeReport) {
        report.candidates += 1;

        // Bounds are in characters, not bytes
        let len = candidate.chars().count();
        if len < self.min_length || self.max_length.is_some_and(|max| len > max) {
            report.dropped_by_length += 1;
            return;
        }

        if self.remove_stopwords && self.stoplist.contains(candidate) {
            report.dropped_stopwords += 1;
            return;
        }

        kept.push(candidate.to_string());
    }
}
