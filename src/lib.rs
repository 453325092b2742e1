//! Topical clustering of short text documents.
//!
//! `doclump` groups documents by the words they share: each document becomes a
//! raw term-frequency vector, vectors are clustered with cosine k-means, and
//! every cluster is labeled with its most frequent terms.
//!
//! - [`text`]: tokenizer, stop words, vocabulary, term-frequency vectors
//! - [`cluster`]: cosine similarity and cosine k-means
//! - [`keywords`]: per-cluster keyword extraction
//! - [`pipeline`]: the end-to-end request/response interface
//!
//! ```rust
//! use doclump::{cluster_documents, ClusterRequest};
//!
//! let request = ClusterRequest::new(
//!     ["stock market prices", "market stock trading", "football league match"],
//!     2,
//! )
//! .with_seed(42)
//! .with_top_keywords(2);
//!
//! let response = cluster_documents(&request).unwrap();
//! let members: usize = response.clusters.iter().map(|c| c.member_indices.len()).sum();
//! assert_eq!(members, 3);
//! ```
//!
//! The engine is pure and synchronous: no I/O, no global state, and nothing
//! is cached between calls. Logging goes through `tracing`; install a
//! subscriber in the host to see it.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod text;

pub use cluster::{cosine_similarity, Clustering, CosineKmeans, KmeansFit, Seed};
pub use error::{Error, Result};
pub use keywords::{extract_keywords, Keyword};
pub use pipeline::{
    cluster_documents, Cluster, ClusterRequest, ClusterResponse, ClusterSummary, CorpusStats,
    DocumentClusterer, DocumentClusters,
};
pub use text::{build_vocabulary, tokenize, vectorize, Document, FeatureVector, Tokenizer, Vocabulary};
