//! Stop-word lists.
//!
//! A [`Stoplist`] is an immutable set of lowercase words. The tokenizer
//! holds one and never mutates it, so a single list can back concurrent
//! calls without locking. English uses a built-in curated list; other
//! languages come from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// The built-in English list, in the classic closed-class selection used by
/// most word-level analysis toolkits. Contractions are omitted: the scanner
/// splits on apostrophes, so their stems (`aren`, `doesn`, bare `t`, `s`,
/// `ll`, ...) appear here instead.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn",
    "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// An immutable set of stop words, lowercase at construction.
#[derive(Debug, Clone, Default)]
pub struct Stoplist {
    words: FxHashSet<String>,
}

impl Stoplist {
    /// The built-in English list.
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// An empty list (nothing is a stop word).
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// A list for the given language code or name.
    ///
    /// `"en"` routes to the built-in list; other supported languages load
    /// from the `stop-words` crate. Unknown codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => return Self::english(),
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return Self::english(),
        };

        Self {
            words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// A list from a custom word set.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add more words, consuming and returning the list. Construction-time
    /// only: once a tokenizer holds the list, it is never mutated.
    pub fn extend(mut self, words: &[&str]) -> Self {
        for word in words {
            self.words.insert(word.to_lowercase());
        }
        self
    }

    /// Check membership. The probe is lowercased before the lookup.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
