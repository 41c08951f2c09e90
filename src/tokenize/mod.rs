//! Tokenization components
//!
//! This module provides word-level tokenization and sentence splitting.

pub mod sentence;
pub mod word;

pub use sentence::SentenceSplitter;
pub use word::WordTokenizer;
