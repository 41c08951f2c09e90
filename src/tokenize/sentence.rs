//! Rule-based sentence splitting.
//!
//! A sentence ends at a run of terminator punctuation (`.` `!` `?`),
//! extended over any closing quotes or brackets that immediately follow.
//! No abbreviation dictionary or trained model is involved; this is the
//! deliberately simple scan that word-level analysis needs, not a
//! linguistic segmenter.

/// Splits text into sentences, optionally dropping short ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter {
    min_words: usize,
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '\'' | '"' | '\u{2019}' | '\u{201d}' | ')' | ']' | '\u{bb}')
}

impl SentenceSplitter {
    /// Create a splitter that keeps every sentence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop sentences with fewer than `min_words` whitespace-separated
    /// words.
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Split `text` into trimmed sentence slices, in order. Blank input
    /// yields an empty vec. The slices borrow from `text`; nothing is
    /// copied.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !is_terminator(c) {
                continue;
            }

            // Extend over the rest of the terminator run and any trailing
            // closing quote or bracket ("He left!?" ends after the quote).
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next_c)) = chars.peek() {
                if is_terminator(next_c) || is_closer(next_c) {
                    end = next_idx + next_c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        if self.min_words > 0 {
            sentences.retain(|s| s.split_whitespace().count() >= self.min_words);
        }

        sentences
    }
}
