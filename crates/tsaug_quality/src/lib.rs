//! # tsaug_quality
//!
//! Qualitative benchmarking for augmented time series.
//!
//! Augmentation changes a series by design; dynamic time warping quantifies
//! how far an augmented series drifted from its original by computing the
//! minimal-cost monotonic alignment between the two.
//!
//! ```rust
//! use tsaug_quality::compute_dtw;
//!
//! let original = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let augmented = vec![1.1, 2.0, 2.9, 4.2, 5.0];
//! let aligned = compute_dtw(&original, &augmented)?;
//! assert!(aligned.distance >= 0.0);
//! # Ok::<(), tsaug_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod dtw;

pub use dtw::{compute_dtw, Alignment};
