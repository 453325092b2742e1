//! End-to-end document clustering.
//!
//! Tokenize → build vocabulary → vectorize → cosine k-means → keywords.
//! Everything is rebuilt from scratch on every call; nothing is cached
//! between runs.

use serde::{Deserialize, Serialize};

use crate::cluster::{CosineKmeans, Seed, DEFAULT_MAX_ITER};
use crate::error::{Error, Result};
use crate::keywords::{extract_keywords, keyword_terms, Keyword, DEFAULT_TOP_KEYWORDS};
use crate::text::{Document, StopWords, Tokenizer, Vocabulary, DEFAULT_MIN_LEN};

/// Number of corpus-wide terms reported in [`CorpusStats::top_terms`].
pub const TOP_CORPUS_TERMS: usize = 30;

/// A clustering request, as a host application would send it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRequest {
    /// Raw document texts.
    pub documents: Vec<String>,
    /// Number of clusters.
    pub k: usize,
    /// Seed for reproducible runs; `None` is non-deterministic.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Keywords reported per cluster.
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,
    /// Tokens shorter than this many characters are dropped.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
    /// Drop the built-in English and Chinese stop words.
    #[serde(default)]
    pub stop_words: bool,
}

fn default_top_keywords() -> usize {
    DEFAULT_TOP_KEYWORDS
}

fn default_min_token_len() -> usize {
    DEFAULT_MIN_LEN
}

impl ClusterRequest {
    /// Request `k` clusters over `documents`, unseeded, 5 keywords each.
    pub fn new<I, S>(documents: I, k: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
            k,
            seed: None,
            top_keywords: DEFAULT_TOP_KEYWORDS,
            min_token_len: DEFAULT_MIN_LEN,
            stop_words: false,
        }
    }

    /// Seed the run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of keywords per cluster.
    pub fn with_top_keywords(mut self, top_keywords: usize) -> Self {
        self.top_keywords = top_keywords;
        self
    }

    /// Set the minimum token length in characters.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Enable or disable the built-in stop-word lists.
    pub fn with_stop_words(mut self, stop_words: bool) -> Self {
        self.stop_words = stop_words;
        self
    }

    fn tokenizer(&self) -> Tokenizer {
        let tokenizer = Tokenizer::new().with_min_len(self.min_token_len);
        if self.stop_words {
            tokenizer.with_stop_words(StopWords::builtin())
        } else {
            tokenizer
        }
    }
}

/// One cluster in a [`ClusterResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Cluster index (stable within one run; gaps mean a cluster ended empty).
    pub index: usize,
    /// 0-based positions of the member documents in the request.
    pub member_indices: Vec<usize>,
    /// Top keywords, most frequent first.
    pub keywords: Vec<String>,
}

/// Result of a [`ClusterRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterResponse {
    /// Non-empty clusters in index order.
    pub clusters: Vec<ClusterSummary>,
}

/// Cluster `request.documents` into at most `request.k` groups.
///
/// ```rust
/// use doclump::{cluster_documents, ClusterRequest};
///
/// let request = ClusterRequest::new(["apple banana", "banana apple", "car engine"], 2)
///     .with_seed(7);
/// let response = cluster_documents(&request).unwrap();
///
/// let together = response
///     .clusters
///     .iter()
///     .any(|c| c.member_indices == vec![0, 1]);
/// assert!(together);
/// ```
pub fn cluster_documents(request: &ClusterRequest) -> Result<ClusterResponse> {
    let documents = Document::from_texts(request.documents.iter().map(String::as_str));
    let clusters = DocumentClusterer::new(request.k)
        .with_seed_source(Seed::from(request.seed))
        .with_top_keywords(request.top_keywords)
        .with_tokenizer(request.tokenizer())
        .run(&documents)?;
    Ok(clusters.into_response())
}

/// A cluster of documents with its centroid and keywords.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Cluster index.
    pub index: usize,
    /// Ordinals of the member documents, ascending.
    pub member_indices: Vec<usize>,
    /// Mean term-frequency vector of the members.
    pub centroid: Vec<f32>,
    /// Ranked keywords.
    pub keywords: Vec<Keyword>,
}

/// Token statistics for the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Tokens across all documents, after filtering.
    pub total_tokens: usize,
    /// Distinct tokens (the vocabulary size).
    pub unique_tokens: usize,
    /// Most frequent tokens across all documents.
    pub top_terms: Vec<Keyword>,
}

/// Full output of [`DocumentClusterer::run`].
#[derive(Debug, Clone, Serialize)]
pub struct DocumentClusters {
    /// Vocabulary the vectors were built over.
    pub vocabulary: Vocabulary,
    /// Non-empty clusters in index order.
    pub clusters: Vec<Cluster>,
    /// K-means rounds performed.
    pub iterations: usize,
    /// Whether assignments stabilized before the iteration cap.
    pub converged: bool,
    /// Corpus-wide token statistics.
    pub stats: CorpusStats,
}

impl DocumentClusters {
    /// The cluster containing document `ordinal`.
    pub fn cluster_of(&self, ordinal: usize) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.member_indices.contains(&ordinal))
    }

    /// Drop centroids and scores, keeping what a host renders.
    pub fn into_response(self) -> ClusterResponse {
        ClusterResponse {
            clusters: self
                .clusters
                .into_iter()
                .map(|c| ClusterSummary {
                    index: c.index,
                    member_indices: c.member_indices,
                    keywords: keyword_terms(&c.keywords),
                })
                .collect(),
        }
    }
}

/// Configurable clustering pipeline.
#[derive(Debug, Clone)]
pub struct DocumentClusterer {
    k: usize,
    max_iter: usize,
    seed: Seed,
    top_keywords: usize,
    tokenizer: Tokenizer,
}

impl DocumentClusterer {
    /// Pipeline producing at most `k` clusters with default settings.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            seed: Seed::Entropy,
            top_keywords: DEFAULT_TOP_KEYWORDS,
            tokenizer: Tokenizer::default(),
        }
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Seed::Fixed(seed);
        self
    }

    /// Set the random source explicitly.
    pub fn with_seed_source(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Set the k-means iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the number of keywords per cluster.
    pub fn with_top_keywords(mut self, top_keywords: usize) -> Self {
        self.top_keywords = top_keywords;
        self
    }

    /// Use a custom tokenizer (minimum length, stop words).
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Cluster raw texts, numbered from 0.
    pub fn run_texts<S: AsRef<str>>(&self, texts: &[S]) -> Result<DocumentClusters> {
        let documents = Document::from_texts(texts.iter().map(|t| str::to_owned(t.as_ref())));
        self.run(&documents)
    }

    /// Cluster `documents`.
    pub fn run(&self, documents: &[Document]) -> Result<DocumentClusters> {
        let n = documents.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        let token_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.tokenizer.tokenize(d.text()))
            .collect();
        let vocabulary = Vocabulary::from_token_lists(&token_lists)?;
        let vectors: Vec<Vec<f32>> = token_lists
            .iter()
            .map(|tokens| vocabulary.vectorize_tokens(tokens).to_dense())
            .collect();

        let fit = CosineKmeans::new(self.k)
            .with_max_iter(self.max_iter)
            .with_seed_source(self.seed)
            .fit(&vectors)?;

        let clusters: Vec<Cluster> = fit
            .members()
            .into_iter()
            .map(|(index, points)| {
                let keywords = extract_keywords(
                    points.iter().map(|&p| token_lists[p].as_slice()),
                    self.top_keywords,
                );
                let mut member_indices: Vec<usize> =
                    points.iter().map(|&p| documents[p].ordinal()).collect();
                member_indices.sort_unstable();
                Cluster {
                    index,
                    member_indices,
                    centroid: fit.centroids[index].clone(),
                    keywords,
                }
            })
            .collect();

        let stats = CorpusStats {
            total_tokens: token_lists.iter().map(Vec::len).sum(),
            unique_tokens: vocabulary.len(),
            top_terms: extract_keywords(token_lists.iter().map(Vec::as_slice), TOP_CORPUS_TERMS),
        };

        tracing::debug!(
            documents = n,
            k = self.k,
            clusters = clusters.len(),
            vocabulary = vocabulary.len(),
            iterations = fit.iterations,
            converged = fit.converged,
            "clustered documents"
        );

        Ok(DocumentClusters {
            vocabulary,
            clusters,
            iterations: fit.iterations,
            converged: fit.converged,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::StopWords;

    #[test]
    fn groups_near_duplicates() {
        let result = DocumentClusterer::new(2)
            .with_seed(1)
            .run_texts(&["apple banana", "banana apple", "car engine"])
            .unwrap();

        assert_eq!(result.clusters.len(), 2);
        let fruit = result.cluster_of(0).unwrap();
        assert_eq!(fruit.member_indices, vec![0, 1]);
        assert_eq!(result.cluster_of(2).unwrap().member_indices, vec![2]);
        assert_eq!(fruit.centroid.len(), result.vocabulary.len());
        assert!(result.converged);
    }

    #[test]
    fn corpus_stats() {
        let result = DocumentClusterer::new(1)
            .with_seed(0)
            .run_texts(&["rust rust cargo", "cargo crate"])
            .unwrap();
        assert_eq!(result.stats.total_tokens, 5);
        assert_eq!(result.stats.unique_tokens, 3);
        assert_eq!(result.stats.top_terms[0].term, "rust");
        assert_eq!(result.stats.top_terms[0].count, 2);
        assert_eq!(result.stats.top_terms[1].term, "cargo");
    }

    #[test]
    fn single_cluster_keywords() {
        let result = DocumentClusterer::new(1)
            .with_top_keywords(2)
            .run_texts(&["solar wind solar", "wind solar grid"])
            .unwrap();
        assert_eq!(result.clusters.len(), 1);
        assert_eq!(keyword_terms(&result.clusters[0].keywords), vec!["solar", "wind"]);
    }

    #[test]
    fn stop_words_shape_keywords() {
        let tokenizer = Tokenizer::new().with_stop_words(StopWords::english());
        let result = DocumentClusterer::new(1)
            .with_tokenizer(tokenizer)
            .run_texts(&["the market and the bank", "the bank of the market"])
            .unwrap();
        let terms = keyword_terms(&result.clusters[0].keywords);
        assert_eq!(terms, vec!["market", "bank"]);
    }

    #[test]
    fn ordinals_survive() {
        let docs = vec![Document::new(10, "alpha beta"), Document::new(4, "gamma delta")];
        let result = DocumentClusterer::new(2).with_seed(3).run(&docs).unwrap();
        let mut seen: Vec<usize> = result
            .clusters
            .iter()
            .flat_map(|c| c.member_indices.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![4, 10]);
    }

    #[test]
    fn validation_order() {
        let empty: [&str; 0] = [];
        assert_eq!(
            DocumentClusterer::new(1).run_texts(&empty).unwrap_err(),
            Error::EmptyInput
        );
        assert_eq!(
            DocumentClusterer::new(5).run_texts(&["aa", "bb", "cc"]).unwrap_err(),
            Error::InvalidClusterCount {
                requested: 5,
                n_items: 3
            }
        );
        assert_eq!(
            DocumentClusterer::new(1).run_texts(&["a", "?"]).unwrap_err(),
            Error::EmptyInput
        );
    }

    #[test]
    fn request_defaults_from_json() {
        let request: ClusterRequest =
            serde_json::from_str(r#"{"documents": ["aa bb", "cc dd"], "k": 2}"#).unwrap();
        assert_eq!(request.seed, None);
        assert_eq!(request.top_keywords, DEFAULT_TOP_KEYWORDS);
        assert_eq!(request.min_token_len, DEFAULT_MIN_LEN);
        assert!(!request.stop_words);
        assert_eq!(request, ClusterRequest::new(["aa bb", "cc dd"], 2));
    }

    #[test]
    fn request_tokenizer_options() {
        let request: ClusterRequest = serde_json::from_str(
            r#"{"documents": ["the a x"], "k": 1, "min_token_len": 1, "stop_words": true}"#,
        )
        .unwrap();
        assert_eq!(request.tokenizer().tokenize("the a x"), vec!["x"]);
        assert_eq!(
            ClusterRequest::new(["aa"], 1).tokenizer().tokenize("the a x"),
            vec!["the"]
        );
    }

    #[test]
    fn rich_result_serializes() {
        let result = DocumentClusterer::new(1)
            .with_top_keywords(1)
            .run_texts(&["solar wind", "wind solar"])
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["vocabulary"], serde_json::json!({ "terms": ["solar", "wind"] }));
        assert_eq!(json["clusters"][0]["member_indices"], serde_json::json!([0, 1]));
        assert_eq!(json["clusters"][0]["centroid"], serde_json::json!([1.0, 1.0]));
        assert_eq!(
            json["clusters"][0]["keywords"],
            serde_json::json!([{ "term": "solar", "count": 2, "score": 100 }])
        );
        assert_eq!(json["stats"]["unique_tokens"], 2);
        assert_eq!(json["converged"], true);
    }
}
