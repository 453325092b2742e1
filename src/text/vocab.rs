//! Vocabulary construction and term-frequency vectorization.
//!
//! The vocabulary fixes the dimensionality of every feature vector in one
//! clustering request. Index `i` of every [`FeatureVector`] counts occurrences
//! of `vocabulary.term(i)`. Counts are raw: no normalization, no IDF.

use std::collections::HashMap;

use serde::Serialize;

use super::tokenize::Tokenizer;
use crate::error::{Error, Result};

/// An input text plus its position in the caller's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    ordinal: usize,
    text: String,
}

impl Document {
    /// Create a document at position `ordinal`.
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }

    /// Wrap a list of texts, numbering them from 0.
    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Self::new(i, t))
            .collect()
    }

    /// Position in the original input list.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Raw text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered, deduplicated set of tokens for one request (first-seen order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from already tokenized documents.
    ///
    /// Returns [`Error::EmptyInput`] if there are no documents or no tokens.
    pub fn from_token_lists<T: AsRef<[String]>>(token_lists: &[T]) -> Result<Self> {
        if token_lists.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut vocab = Self::default();
        for token in token_lists.iter().flat_map(|t| t.as_ref()) {
            if !vocab.index.contains_key(token) {
                vocab.index.insert(token.clone(), vocab.terms.len());
                vocab.terms.push(token.clone());
            }
        }

        if vocab.terms.is_empty() {
            return Err(Error::EmptyInput);
        }
        tracing::debug!(terms = vocab.terms.len(), docs = token_lists.len(), "built vocabulary");
        Ok(vocab)
    }

    /// Number of distinct terms (the vector dimensionality).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false for a vocabulary built by this crate.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term at dimension `i`.
    pub fn term(&self, i: usize) -> Option<&str> {
        self.terms.get(i).map(String::as_str)
    }

    /// Dimension of `term`, if present.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// All terms, in dimension order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Count the tokens of one document over this vocabulary.
    ///
    /// Tokens not in the vocabulary are ignored.
    pub fn vectorize_tokens(&self, tokens: &[String]) -> FeatureVector {
        let mut counts = vec![0u32; self.terms.len()];
        for token in tokens {
            if let Some(&i) = self.index.get(token) {
                counts[i] += 1;
            }
        }
        FeatureVector(counts)
    }
}

/// Raw term counts over a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureVector(Vec<u32>);

impl FeatureVector {
    /// Counts in vocabulary order.
    pub fn counts(&self) -> &[u32] {
        &self.0
    }

    /// Dimensionality.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every count is zero (the document matched no terms).
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Counts as `f32`, the representation the clusterer works on.
    pub fn to_dense(&self) -> Vec<f32> {
        self.0.iter().map(|&c| c as f32).collect()
    }
}

impl From<Vec<u32>> for FeatureVector {
    fn from(counts: Vec<u32>) -> Self {
        Self(counts)
    }
}

/// Build a vocabulary with the default tokenizer.
pub fn build_vocabulary(documents: &[Document]) -> Result<Vocabulary> {
    build_vocabulary_with(documents, &Tokenizer::default())
}

/// Build a vocabulary with a specific tokenizer.
pub fn build_vocabulary_with(documents: &[Document], tokenizer: &Tokenizer) -> Result<Vocabulary> {
    let token_lists: Vec<Vec<String>> = documents
        .iter()
        .map(|d| tokenizer.tokenize(d.text()))
        .collect();
    Vocabulary::from_token_lists(&token_lists)
}

/// Vectorize one document with the default tokenizer.
pub fn vectorize(document: &Document, vocabulary: &Vocabulary) -> FeatureVector {
    vectorize_with(document, vocabulary, &Tokenizer::default())
}

/// Vectorize one document with a specific tokenizer.
///
/// Use the same tokenizer the vocabulary was built with.
pub fn vectorize_with(
    document: &Document,
    vocabulary: &Vocabulary,
    tokenizer: &Tokenizer,
) -> FeatureVector {
    vocabulary.vectorize_tokens(&tokenizer.tokenize(document.text()))
}
