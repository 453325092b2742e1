//! Text preprocessing: tokens, stop words, vocabulary, and term-frequency vectors.
//!
//! ```rust
//! use doclump::text::{build_vocabulary, vectorize, Document};
//!
//! let docs = Document::from_texts(["apple banana", "banana banana car"]);
//! let vocab = build_vocabulary(&docs).unwrap();
//! assert_eq!(vocab.terms(), &["apple", "banana", "car"]);
//! assert_eq!(vectorize(&docs[1], &vocab).counts(), &[0, 2, 1]);
//! ```

mod stopwords;
mod tokenize;
mod vocab;

pub use stopwords::{Script, StopWords};
pub use tokenize::{tokenize, Tokenizer, DEFAULT_MIN_LEN};
pub use vocab::{
    build_vocabulary, build_vocabulary_with, vectorize, vectorize_with, Document, FeatureVector,
    Vocabulary,
};
