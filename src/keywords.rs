//! Keyword extraction for cluster labels.
//!
//! Keywords are the most frequent tokens across a cluster's member documents.
//! Counts are raw; the only filtering is whatever the tokenizer already did
//! (minimum length, optional stop words).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default number of keywords per cluster.
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

/// A ranked keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// The token.
    pub term: String,
    /// Occurrences across the documents it was extracted from.
    pub count: u32,
    /// Count relative to the top keyword, rounded to 0..=100.
    pub score: u8,
}

/// The `top_n` most frequent tokens across `documents`.
///
/// Sorted by descending count; equal counts keep first-seen order (documents
/// in iteration order, tokens left to right).
///
/// ```rust
/// use doclump::keywords::extract_keywords;
///
/// let doc: Vec<String> = ["rust", "cargo", "rust"].map(String::from).to_vec();
/// let keywords = extract_keywords([doc.as_slice()], 5);
/// assert_eq!(keywords[0].term, "rust");
/// assert_eq!(keywords[0].count, 2);
/// assert_eq!(keywords[1].score, 50);
/// ```
pub fn extract_keywords<'a, I>(documents: I, top_n: usize) -> Vec<Keyword>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for token in documents.into_iter().flatten() {
        match position.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);

    let max = counts.first().map_or(1, |&(_, c)| c).max(1);
    counts
        .into_iter()
        .map(|(term, count)| Keyword {
            term: term.to_string(),
            count,
            score: ((f64::from(count) * 100.0 / f64::from(max)).round()) as u8,
        })
        .collect()
}

/// Just the keyword strings, in rank order.
pub fn keyword_terms(keywords: &[Keyword]) -> Vec<String> {
    keywords.iter().map(|k| k.term.clone()).collect()
}
