//! Clustering term-frequency vectors by topic.
//!
//! ## Cosine k-means
//!
//! The classic k-means loop (assign each point to the nearest centroid, move
//! each centroid to the mean of its points, repeat), with cosine similarity
//! as the nearness measure. Cosine ignores document length: `"apple banana"`
//! and `"apple banana apple banana"` point in the same direction and are
//! identical to the clusterer.
//!
//! **Assignments are hard**: every point belongs to exactly one cluster after
//! each iteration.
//!
//! **Term counts are raw.** There is no IDF weighting, so frequent words that
//! appear everywhere pull documents together. Filter them with stop words at
//! tokenization time if that matters for your corpus.
//!
//! ## Usage
//!
//! ```rust
//! use doclump::cluster::{cosine_similarity, Clustering, CosineKmeans};
//!
//! let data = vec![
//!     vec![2.0, 1.0, 0.0, 0.0],
//!     vec![1.0, 2.0, 0.0, 0.0],
//!     vec![0.0, 0.0, 1.0, 3.0],
//!     vec![0.0, 0.0, 2.0, 2.0],
//! ];
//!
//! let labels = CosineKmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_eq!(labels[2], labels[3]);
//! assert_ne!(labels[0], labels[2]);
//!
//! assert_eq!(cosine_similarity(&data[0], &data[2]), 0.0);
//! ```

mod kmeans;
mod seed;
mod similarity;
mod traits;

pub use kmeans::{CosineKmeans, KmeansFit, DEFAULT_MAX_ITER};
pub use seed::Seed;
pub use similarity::cosine_similarity;
pub use traits::Clustering;
