use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model and return one cluster label per input vector.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    ///
    /// Labels returned by `fit_predict` are below this value, but not every
    /// label is guaranteed to be used.
    fn n_clusters(&self) -> usize;
}
