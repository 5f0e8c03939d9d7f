//! Tolerance-based dataset comparison.

use tsaug_core::Dataset;

/// Largest per-element absolute difference between two datasets, and whether
/// every difference is within `tolerance`.
///
/// Elements are compared positionally over the common shape of the two
/// datasets; callers verifying a round-trip pass datasets of equal shape.
#[must_use]
pub fn compare_within_tolerance(
    original: &Dataset,
    reconstructed: &Dataset,
    tolerance: f64,
) -> (f64, bool) {
    let mut max_diff = 0.0;
    let mut all_within = true;

    for (orig_row, recon_row) in original.features().iter().zip(reconstructed.features()) {
        for (&orig, &recon) in orig_row.iter().zip(recon_row.iter()) {
            let diff = (orig - recon).abs();
            if diff > max_diff {
                max_diff = diff;
            }
            if diff > tolerance {
                all_within = false;
            }
        }
    }

    (max_diff, all_within)
}
