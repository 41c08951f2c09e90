//! # rapid-tokenize
//!
//! Word-level text tokenization: normalize raw text into an ordered list of
//! lowercase word tokens, with length bounds and optional stop-word
//! removal.
//!
//! The same small tokenizer tends to get reimplemented ad hoc wherever text
//! is preprocessed; this crate consolidates it behind one configurable,
//! never-failing call.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rapid_tokenize::{tokenize, TokenizeConfig, WordTokenizer};
//!
//! // Defaults: min length 1, max length 15, no stop-word removal.
//! let tokens = tokenize("This is a sentence.");
//! assert_eq!(tokens, vec!["this", "is", "a", "sentence"]);
//!
//! // Configured: stop-word removal with the built-in English list.
//! let tokenizer = WordTokenizer::new(
//!     TokenizeConfig::new().with_remove_stopwords(true),
//! );
//! let tokens = tokenizer.tokenize("This is a sentence.");
//! assert_eq!(tokens, vec!["sentence"]);
//! ```
//!
//! ## Design
//!
//! - **Never fails.** [`WordTokenizer::tokenize`] returns a `Vec<String>`,
//!   not a `Result`. Missing or blank input yields an empty list; a
//!   rejected configuration is armed at construction and reported through
//!   the observer side channel on every call. See [`observer`] and
//!   [`errors`].
//! - **Pure and thread-safe.** A compiled tokenizer is immutable; calls
//!   read only their arguments and the read-only stoplist, so one instance
//!   serves concurrent callers. [`WordTokenizer::tokenize_batch`]
//!   parallelizes across documents with rayon.
//! - **No global logging.** Telemetry goes through an injected
//!   [`TokenizeObserver`]; nothing is installed process-wide. The optional
//!   `tracing` feature adds an observer that bridges into `tracing`.
//! - **Serde-friendly config.** [`TokenizeConfig`] deserializes from as
//!   little as `{}`; [`validate::validate_config`] reports every problem
//!   in a config at once.

pub mod errors;
pub mod observer;
pub mod stopwords;
pub mod tokenize;
pub mod types;
pub mod validate;

pub use errors::{IssueCode, TokenizeFault};
pub use observer::{CountingObserver, NoopObserver, TokenizeObserver};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use stopwords::Stoplist;
pub use tokenize::{SentenceSplitter, WordTokenizer};
pub use types::{EmptyInput, TokenizeConfig, TokenizeReport, DEFAULT_MAX_LENGTH};
pub use validate::{validate_config, ConfigReport};

/// Tokenize `text` with the default configuration.
///
/// Equivalent to building a [`WordTokenizer`] from
/// [`TokenizeConfig::default`] and calling it once; callers tokenizing more
/// than one document should build the tokenizer themselves and reuse it.
pub fn tokenize(text: &str) -> Vec<String> {
    WordTokenizer::new(TokenizeConfig::default()).tokenize(text)
}

/// Tokenize `text` with the given configuration.
pub fn tokenize_with(text: &str, config: &TokenizeConfig) -> Vec<String> {
    WordTokenizer::new(config.clone()).tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level_tokenize() {
        assert_eq!(
            tokenize("This is a sentence."),
            vec!["this", "is", "a", "sentence"]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_crate_level_tokenize_with() {
        let config = TokenizeConfig::new().with_min_length(3);
        assert_eq!(
            tokenize_with("This is a sentence.", &config),
            vec!["this", "sentence"]
        );
    }

    #[test]
    fn test_full_pipeline_sentences_then_words() {
        let splitter = SentenceSplitter::new().with_min_words(2);
        let tokenizer = WordTokenizer::new(TokenizeConfig::new().with_remove_stopwords(true));

        let text = "Tokenizers split text. Short. They also filter stop words!";
        let tokens: Vec<Vec<String>> = splitter
            .split(text)
            .iter()
            .map(|sent| tokenizer.tokenize(sent))
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], vec!["tokenizers", "split", "text"]);
        assert_eq!(tokens[1], vec!["also", "filter", "stop", "words"]);
    }

    #[test]
    fn test_config_from_json_through_tokenizer() {
        let config: TokenizeConfig = serde_json::from_str(
            r#"{ "min_length": 2, "max_length": null, "remove_stopwords": true }"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_valid());

        let tokens = tokenize_with("The antidisestablishmentarianism debate.", &config);
        assert_eq!(tokens, vec!["antidisestablishmentarianism", "debate"]);
    }
}
