//! # tsaug
//!
//! Fast batch-oriented time series augmentation in Rust.
//!
//! tsaug-rs enlarges and perturbs labeled time series datasets through
//! configurable, composable augmenters:
//!
//! - **Datasets**: labeled univariate series batches with enforced
//!   shape invariants
//! - **Augmenters**: noise injection, cropping, warping, pooling, frequency
//!   perturbations, and more, over single samples or rayon-parallel batches
//! - **Pipelines**: ordered stage composition with optional row-wise
//!   per-sample execution and per-row conditional gating
//! - **Spectral transforms**: FFT/DCT round-trips with tolerance checking
//! - **Quality benchmarking**: dynamic time warping distance and alignment
//!
//! ## Quick Start
//!
//! ```rust
//! use tsaug::prelude::*;
//!
//! let mut set = Dataset::new(vec![vec![1.0; 100]], vec!["1".into()])?;
//!
//! let pipeline = AugmentationPipeline::new()
//!     .add(Repeat::new(5)?)
//!     .add(Crop::new(20)?)
//!     .add(Jittering::new(0.2)?);
//! pipeline.execute(&mut set, true, false)?;
//!
//! assert_eq!(set.n_samples(), 5);
//! assert_eq!(set.seq_len(), 20);
//! # Ok::<(), tsaug_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all crates
pub use tsaug_augment as augment;
pub use tsaug_core as core;
pub use tsaug_quality as quality;
pub use tsaug_spectral as spectral;

/// Prelude module for convenient imports.
///
/// ```rust
/// use tsaug::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tsaug_core::{CoreError, Dataset, Result, Seed};

    // Augmenters and composition
    pub use tsaug_augment::{
        build_augmenter, build_pipeline, AddNoise, AugmentationPipeline, Augmenter,
        AmplitudePhasePerturbation, ConditionalAugmenter, Convolve, Crop, Drift, Drop,
        FrequencyMask, Jittering, KernelWindow, NoiseKind, Permutate, Pool, PoolKind, Quantize,
        RandomTimeWarp, Repeat, Resize, Reverse, Rotation, Scaling,
    };

    // Spectral transforms
    pub use tsaug_spectral::{
        compare_within_tolerance, dataset_dct, dataset_fft, dataset_idct, dataset_ifft,
    };

    // Quality benchmarking
    pub use tsaug_quality::{compute_dtw, Alignment};
}
