//! Spherical (cosine) k-means over term-frequency vectors.
//!
//! # The Algorithm
//!
//! Lloyd iterations with cosine similarity in place of Euclidean distance:
//!
//! 1. **Initialization**: pick `k` distinct points uniformly at random (without
//!    replacement) as the initial centroids.
//! 2. **Assignment**: each point joins the centroid with the highest cosine
//!    similarity. Ties go to the lowest cluster index, so a zero vector (which
//!    is 0-similar to everything) always lands in cluster 0.
//! 3. **Convergence**: stop when an assignment equals the previous one.
//! 4. **Update**: each centroid becomes the element-wise mean of its members.
//!
//! Steps 2–4 repeat at most `max_iter` times (20 by default).
//!
//! ## Empty clusters
//!
//! A cluster that loses all its members keeps its previous centroid. It is
//! not reseeded, so it may stay empty for the rest of the run; empty clusters
//! are simply absent from [`KmeansFit::members`].
//!
//! ## Complexity
//!
//! O(iterations × k × n × d) for the assignment step, which dominates. With
//! the `parallel` feature the per-point work of the assignment step is spread
//! over a rayon pool; the update and convergence check stay serial.

use super::seed::Seed;
use super::similarity::cosine_similarity;
use super::traits::Clustering;
use crate::error::{Error, Result};

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 20;

/// Cosine k-means clusterer.
#[derive(Debug, Clone)]
pub struct CosineKmeans {
    k: usize,
    max_iter: usize,
    seed: Seed,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Cluster index per input point.
    pub assignments: Vec<usize>,
    /// Final centroids, one per cluster index (including empty clusters).
    pub centroids: Vec<Vec<f32>>,
    /// Number of assignment/update rounds performed.
    pub iterations: usize,
    /// Whether the run stopped because assignments stabilized.
    pub converged: bool,
}

impl KmeansFit {
    /// Members of each non-empty cluster, in cluster-index order.
    ///
    /// Each entry is `(cluster_index, point_indices)`; point indices are
    /// ascending.
    pub fn members(&self) -> Vec<(usize, Vec<usize>)> {
        let mut groups: Vec<Vec<usize>> = vec![Vec::new(); self.centroids.len()];
        for (point, &cluster) in self.assignments.iter().enumerate() {
            groups[cluster].push(point);
        }
        groups
            .into_iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }
}

impl CosineKmeans {
    /// Create a clusterer for `k` clusters with an unseeded generator.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            seed: Seed::Entropy,
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Seed::Fixed(seed);
        self
    }

    /// Set the random source explicitly (seeded or unseeded).
    pub fn with_seed_source(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Configured iteration cap.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Configured seed.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Run k-means on `data`.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        let dim = data[0].len();
        if let Some(bad) = data.iter().find(|x| x.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: bad.len(),
            });
        }

        let mut rng = self.seed.rng();
        let centroids: Vec<Vec<f32>> = rand::seq::index::sample(rng.as_mut(), n, self.k)
            .iter()
            .map(|i| data[i].clone())
            .collect();

        Ok(self.run(data, centroids))
    }

    /// Lloyd iterations from the given initial centroids.
    fn run(&self, data: &[Vec<f32>], mut centroids: Vec<Vec<f32>>) -> KmeansFit {
        let mut assignments = assign(data, &centroids);
        update_centroids(data, &assignments, &mut centroids);
        let mut iterations = 1;
        let mut converged = false;

        while iterations < self.max_iter {
            let next = assign(data, &centroids);
            if next == assignments {
                converged = true;
                break;
            }
            tracing::trace!(
                iteration = iterations,
                changed = next.iter().zip(&assignments).filter(|(a, b)| a != b).count(),
                "k-means reassignment"
            );
            assignments = next;
            update_centroids(data, &assignments, &mut centroids);
            iterations += 1;
        }

        tracing::debug!(
            k = self.k,
            n = data.len(),
            iterations,
            converged,
            "cosine k-means finished"
        );

        KmeansFit {
            assignments,
            centroids,
            iterations,
            converged,
        }
    }
}

impl Default for CosineKmeans {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Clustering for CosineKmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.assignments)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Index of the most similar centroid; ties go to the lowest index.
fn nearest(point: &[f32], centroids: &[Vec<f32>]) -> usize {
    let mut best = 0;
    let mut best_sim = f32::NEG_INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let sim = cosine_similarity(point, centroid);
        if sim > best_sim {
            best_sim = sim;
            best = c;
        }
    }
    best
}

#[cfg(not(feature = "parallel"))]
fn assign(data: &[Vec<f32>], centroids: &[Vec<f32>]) -> Vec<usize> {
    data.iter().map(|x| nearest(x, centroids)).collect()
}

#[cfg(feature = "parallel")]
fn assign(data: &[Vec<f32>], centroids: &[Vec<f32>]) -> Vec<usize> {
    use rayon::prelude::*;
    data.par_iter().map(|x| nearest(x, centroids)).collect()
}

/// Replace each non-empty cluster's centroid with the mean of its members.
fn update_centroids(data: &[Vec<f32>], assignments: &[usize], centroids: &mut [Vec<f32>]) {
    let dim = centroids.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0f64; dim]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (point, &cluster) in data.iter().zip(assignments) {
        counts[cluster] += 1;
        for (s, &v) in sums[cluster].iter_mut().zip(point) {
            *s += f64::from(v);
        }
    }

    for ((centroid, sum), &count) in centroids.iter_mut().zip(&sums).zip(&counts) {
        // Empty clusters keep their previous centroid.
        if count == 0 {
            continue;
        }
        let count = count as f64;
        for (c, &s) in centroid.iter_mut().zip(sum) {
            *c = (s / count) as f32;
        }
    }
}
