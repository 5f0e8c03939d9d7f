//! The [`Augmenter`] trait and the shared batch execution driver.

use rand::RngCore;
use rayon::prelude::*;
use tracing::info_span;

use tsaug_core::{CoreError, Dataset, Result, Seed};

/// A configured, possibly stochastic transformation over univariate series.
///
/// Every variant transforms one sample with [`augment_one`](Self::augment_one)
/// and a whole [`Dataset`] with [`augment_batch`](Self::augment_batch). The
/// single-sample form always executes; probability gating belongs to
/// [`ConditionalAugmenter`](crate::ConditionalAugmenter), which satisfies this
/// same trait and so composes transparently inside pipelines.
///
/// Randomness flows through the `rng` parameter so that the batch driver can
/// hand every row its own stream, derived from [`seed`](Self::seed) by row
/// index. That keeps rows statistically independent and makes parallel and
/// sequential execution row-for-row identical for a fixed seed.
pub trait Augmenter: Send + Sync {
    /// Transform a single series, unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Configuration`] when the configured parameters
    /// are incompatible with this sample, for variants whose documented
    /// policy is to fail rather than clamp.
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>>;

    /// Name of this augmenter for diagnostics and pipeline errors.
    fn name(&self) -> &str;

    /// Master seed from which per-row random streams are derived.
    fn seed(&self) -> Seed;

    /// Whether this augmenter can be interleaved row-by-row inside a
    /// pipeline rather than running only as a whole-batch stage.
    ///
    /// Variants that need a batch-level view (row duplication, whole-batch
    /// domain round-trips) override this to return `false`.
    fn supports_per_sample_pipelining(&self) -> bool {
        true
    }

    /// Apply [`augment_one`](Self::augment_one) to every row of the dataset.
    ///
    /// Rows are processed independently; with `parallel` they fan out over
    /// rayon's worker pool and results are written back by row index, so the
    /// output row order always equals the input row order. The call is
    /// all-or-nothing: on any error the dataset is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates per-row errors, and returns [`CoreError::Dimension`] when
    /// the transformed rows are not uniform in length.
    fn augment_batch(&self, data: &mut Dataset, parallel: bool) -> Result<()> {
        apply_rows(self, data, parallel)
    }
}

/// Shared batch driver: map `augment_one` over all rows with per-row derived
/// RNG streams, validate uniformity, then commit.
pub(crate) fn apply_rows<A>(augmenter: &A, data: &mut Dataset, parallel: bool) -> Result<()>
where
    A: Augmenter + ?Sized,
{
    let span = info_span!("augment_batch", augmenter = augmenter.name(), parallel);
    let _enter = span.enter();

    let seed = augmenter.seed();
    let rows: Result<Vec<Vec<f64>>> = if parallel {
        data.features()
            .par_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut rng = seed.derive_index(i).to_rng();
                augmenter.augment_one(row, &mut rng)
            })
            .collect()
    } else {
        data.features()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut rng = seed.derive_index(i).to_rng();
                augmenter.augment_one(row, &mut rng)
            })
            .collect()
    };

    let rows = rows?;
    ensure_uniform(&rows, augmenter.name())?;
    data.set_features(rows)
}

/// Reject row sets of unequal length before they reach a dataset.
pub(crate) fn ensure_uniform(rows: &[Vec<f64>], operation: &str) -> Result<()> {
    if let Some(first) = rows.first() {
        let len = first.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != len) {
            return Err(CoreError::Dimension(format!(
                "{operation} produced rows of unequal length ({} at row 0, {} at row {i})",
                len,
                row.len()
            )));
        }
    }
    Ok(())
}
