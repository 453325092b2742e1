//! Word tokenization: lowercase, split on non-alphanumerics, drop short tokens.

use super::stopwords::{is_cjk, StopWords};

/// Default minimum token length, in characters.
pub const DEFAULT_MIN_LEN: usize = 2;

/// Splits text into normalized word tokens.
///
/// Every character that is not alphanumeric acts as a separator. A switch
/// between CJK ideographs and other characters also ends a token, so
/// `"ai人工智慧"` yields `["ai", "人工智慧"]`. CJK runs are not segmented
/// further.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Tokens with fewer characters than this are discarded.
    min_len: usize,
    stop_words: StopWords,
}

impl Tokenizer {
    /// Tokenizer with a minimum length of 2 and no stop words.
    pub fn new() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            stop_words: StopWords::none(),
        }
    }

    /// Set the minimum token length in characters.
    ///
    /// A value of 0 behaves like 1: empty tokens are never produced.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Drop tokens contained in `stop_words`.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Configured minimum token length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Configured stop-word list.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Tokenize `text`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_is_cjk = false;

        for ch in text.chars() {
            if !ch.is_alphanumeric() {
                self.flush(&mut current, &mut tokens);
                continue;
            }
            let cjk = is_cjk(ch);
            if cjk != current_is_cjk {
                self.flush(&mut current, &mut tokens);
                current_is_cjk = cjk;
            }
            // Lowercasing can emit combining marks (`İ` -> `i\u{307}`).
            current.extend(ch.to_lowercase().filter(|c| c.is_alphanumeric()));
        }
        self.flush(&mut current, &mut tokens);

        tokens
    }

    fn flush(&self, current: &mut String, tokens: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        let token = std::mem::take(current);
        if token.chars().count() >= self.min_len && !self.stop_words.contains(&token) {
            tokens.push(token);
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize `text` with the default [`Tokenizer`].
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}
