//! Fault taxonomy for tokenization.
//!
//! A [`TokenizeFault`] describes a configuration the tokenizer cannot honor.
//! Faults never escape [`tokenize`](crate::tokenize::word::WordTokenizer::tokenize)
//! as a raised error: they are detected when the tokenizer is built, armed,
//! and then reported through the observer side channel while the call
//! returns an empty token list. Callers that prefer an eager `Result` use
//! [`try_new`](crate::tokenize::word::WordTokenizer::try_new).

use serde::Serialize;
use thiserror::Error;

/// Stable machine-readable code for a fault or validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// `min_length` exceeds `max_length`.
    BoundsConflict,
    /// A custom token pattern failed to compile.
    InvalidPattern,
    /// An unrecognized configuration field was present.
    UnknownField,
    /// The configured bounds drop every possible token.
    DropsAllTokens,
}

impl IssueCode {
    /// Returns the snake_case name used in serialized reports and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoundsConflict => "bounds_conflict",
            Self::InvalidPattern => "invalid_pattern",
            Self::UnknownField => "unknown_field",
            Self::DropsAllTokens => "drops_all_tokens",
        }
    }
}

/// A rejected tokenizer configuration.
///
/// This is the "internal failure" class of the error design: it is the only
/// way a tokenizer call can fail, and it degrades to an empty result rather
/// than propagating. Missing or blank input is *not* a fault — see
/// [`EmptyInput`](crate::types::EmptyInput).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeFault {
    /// No token length can satisfy both bounds.
    #[error("min_length {min} exceeds max_length {max}; no token can satisfy both")]
    BoundsConflict { min: usize, max: usize },

    /// The custom token pattern is not a valid regular expression.
    #[error("token pattern `{pattern}` failed to compile: {detail}")]
    InvalidPattern { pattern: String, detail: String },

    /// Strict mode rejected a configuration field it does not recognize.
    #[error("unrecognized configuration field `{field}`")]
    UnknownField { field: String },
}

impl TokenizeFault {
    /// The stable code for this fault.
    pub fn code(&self) -> IssueCode {
        match self {
            Self::BoundsConflict { .. } => IssueCode::BoundsConflict,
            Self::InvalidPattern { .. } => IssueCode::InvalidPattern,
            Self::UnknownField { .. } => IssueCode::UnknownField,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display() {
        let fault = TokenizeFault::BoundsConflict { min: 10, max: 5 };
        assert_eq!(
            fault.to_string(),
            "min_length 10 exceeds max_length 5; no token can satisfy both"
        );

        let fault = TokenizeFault::InvalidPattern {
            pattern: "[oops".to_string(),
            detail: "unclosed character class".to_string(),
        };
        assert!(fault.to_string().contains("[oops"));
        assert!(fault.to_string().contains("unclosed character class"));
    }

    #[test]
    fn test_fault_codes() {
        let bounds = TokenizeFault::BoundsConflict { min: 2, max: 1 };
        let pattern = TokenizeFault::InvalidPattern {
            pattern: String::new(),
            detail: String::new(),
        };
        let unknown = TokenizeFault::UnknownField {
            field: "bogus".to_string(),
        };

        assert_eq!(bounds.code(), IssueCode::BoundsConflict);
        assert_eq!(pattern.code(), IssueCode::InvalidPattern);
        assert_eq!(unknown.code(), IssueCode::UnknownField);
    }

    #[test]
    fn test_code_serializes_snake_case() {
        let json = serde_json::to_value(IssueCode::InvalidPattern).unwrap();
        assert_eq!(json, "invalid_pattern");
        assert_eq!(IssueCode::DropsAllTokens.as_str(), "drops_all_tokens");
    }
}
