//! # tsaug_spectral
//!
//! Frequency and cosine domain transforms for labeled time series datasets.
//!
//! Each transform is a pure function over a [`Dataset`](tsaug_core::Dataset)
//! applied independently per row, with an optional rayon-parallel path whose
//! output is row-for-row identical to the sequential one. The forward/inverse
//! pairs satisfy a round-trip invariant checked with
//! [`compare_within_tolerance`].
//!
//! ```rust
//! use tsaug_core::Dataset;
//! use tsaug_spectral::{compare_within_tolerance, dataset_fft, dataset_ifft};
//!
//! let set = Dataset::new(
//!     vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
//!     vec!["0".into(), "1".into()],
//! )?;
//! let back = dataset_ifft(&dataset_fft(&set, true)?, true)?;
//! let (_, within) = compare_within_tolerance(&set, &back, 1e-6);
//! assert!(within);
//! # Ok::<(), tsaug_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod compare;
mod cosine;
mod fourier;

pub use compare::compare_within_tolerance;
pub use cosine::{dataset_dct, dataset_idct};
pub use fourier::{dataset_fft, dataset_ifft};

use rayon::prelude::*;

/// Map a closure over rows, in parallel or in index order.
///
/// Output order always equals input order; the parallel path collects by
/// index, never by completion order.
pub(crate) fn map_rows<F>(rows: &[Vec<f64>], parallel: bool, f: F) -> Vec<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64> + Send + Sync,
{
    let span = tracing::debug_span!("map_rows", rows = rows.len(), parallel);
    let _enter = span.enter();
    if parallel {
        rows.par_iter().map(|row| f(row)).collect()
    } else {
        rows.iter().map(|row| f(row)).collect()
    }
}
