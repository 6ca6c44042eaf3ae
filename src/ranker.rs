//! Top-N term ranking over TF-IDF weights

use crate::error::{RankError, Result};
use crate::matrix::WeightedMatrix;
use crate::types::{FeatureRanking, RankedFeature, Vocabulary};
use ndarray::{Array1, ArrayView1, Axis};
use tracing::debug;

/// Default length of a ranking built from a raw score vector
pub const DEFAULT_TOP_N: usize = 20;

/// Default length of per-document and group rankings
pub const DEFAULT_GROUP_TOP_N: usize = 25;

/// Weights below this are zeroed before a group mean
pub const DEFAULT_MIN_WEIGHT: f64 = 0.1;

/// Settings for [`top_mean_features`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanFeatureOptions {
    /// Entries strictly below this weight count as zero. Equal entries are kept.
    pub min_weight: f64,
    /// Maximum number of terms returned
    pub top_n: usize,
}

impl Default for MeanFeatureOptions {
    fn default() -> Self {
        Self {
            min_weight: DEFAULT_MIN_WEIGHT,
            top_n: DEFAULT_GROUP_TOP_N,
        }
    }
}

impl MeanFeatureOptions {
    /// Replace the zeroing threshold
    #[must_use]
    pub const fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = min_weight;
        self
    }

    /// Replace the ranking length
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Pair the `top_n` highest scores with their terms, highest first.
///
/// Equal scores keep column order. `top_n == 0` gives an empty ranking.
pub fn top_features<'a>(
    scores: impl Into<ArrayView1<'a, f64>>,
    vocabulary: &Vocabulary,
    top_n: usize,
) -> Result<FeatureRanking> {
    let scores = scores.into();
    if scores.len() != vocabulary.len() {
        return Err(RankError::ShapeMismatch {
            expected: vocabulary.len(),
            actual: scores.len(),
        });
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let ranking: Vec<RankedFeature> = order
        .into_iter()
        .take(top_n)
        .map(|i| RankedFeature::new(&vocabulary[i], scores[i]))
        .collect();

    debug!(
        terms = vocabulary.len(),
        top_n,
        returned = ranking.len(),
        "Ranked features"
    );

    Ok(FeatureRanking(ranking))
}

/// Highest-weighted terms of a single document
pub fn top_features_in_doc(
    matrix: &WeightedMatrix,
    vocabulary: &Vocabulary,
    row: usize,
    top_n: usize,
) -> Result<FeatureRanking> {
    let dense = matrix.row_dense(row)?;
    debug!(row, "Ranking document features");
    top_features(&dense, vocabulary, top_n)
}

/// Highest mean-weighted terms across a group of documents.
///
/// `group` of `None` or an empty slice both select every row. Weights below
/// `options.min_weight` are zeroed before averaging.
pub fn top_mean_features(
    matrix: &WeightedMatrix,
    vocabulary: &Vocabulary,
    group: Option<&[usize]>,
    options: MeanFeatureOptions,
) -> Result<FeatureRanking> {
    let mut dense = match group {
        Some(rows) if !rows.is_empty() => matrix.select_dense(rows)?,
        _ => matrix.to_dense(),
    };

    let min_weight = options.min_weight;
    dense.mapv_inplace(|w| if w < min_weight { 0.0 } else { w });

    let means: Array1<f64> = dense
        .mean_axis(Axis(0))
        .ok_or(RankError::EmptySelection)?;

    debug!(
        rows = dense.nrows(),
        min_weight,
        "Averaged group feature weights"
    );

    top_features(&means, vocabulary, options.top_n)
}
