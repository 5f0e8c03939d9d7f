//! # tsaug_augment
//!
//! Augmenter variants, pipelines, and conditional gating for labeled time
//! series datasets.
//!
//! Every augmenter implements the [`Augmenter`] trait, which gives a unified
//! interface over single samples (`augment_one`) and whole datasets
//! (`augment_batch`, optionally rayon-parallel with guaranteed row order).
//! Augmenters compose into an [`AugmentationPipeline`] and can be gated per
//! row with [`ConditionalAugmenter`]. The [`build_augmenter`] registry turns
//! `(name, kwargs)` records from configuration loaders into boxed stages.
//!
//! # Examples
//!
//! ```rust
//! use tsaug_augment::{Augmenter, Jittering};
//! use tsaug_core::{Dataset, Seed};
//!
//! let mut set = Dataset::new(vec![vec![1.0; 100]], vec!["1".into()])?;
//!
//! let augmenter = Jittering::new(0.2)?.with_seed(Seed::new(42));
//! augmenter.augment_batch(&mut set, true)?;
//!
//! assert_ne!(set.features()[0], vec![1.0; 100]);
//! # Ok::<(), tsaug_core::CoreError>(())
//! ```
//!
//! ```rust
//! use tsaug_augment::{AugmentationPipeline, Crop, Repeat};
//! use tsaug_core::Dataset;
//!
//! let mut set = Dataset::new(vec![vec![1.0; 100]], vec!["1".into()])?;
//!
//! let pipeline = AugmentationPipeline::new()
//!     .add(Repeat::new(5)?)
//!     .add(Crop::new(20)?);
//! pipeline.execute(&mut set, true, false)?;
//!
//! assert_eq!(set.n_samples(), 5);
//! assert_eq!(set.seq_len(), 20);
//! # Ok::<(), tsaug_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod augmenter;
mod conditional;
mod frequency;
mod noise;
mod pipeline;
mod registry;
mod scale;
mod segment;
mod smooth;
mod warp;

pub use augmenter::Augmenter;
pub use conditional::ConditionalAugmenter;
pub use frequency::{AmplitudePhasePerturbation, FrequencyMask};
pub use noise::{AddNoise, Drop, Jittering, NoiseKind};
pub use pipeline::AugmentationPipeline;
pub use registry::{build_augmenter, build_pipeline};
pub use scale::{Drift, Reverse, Rotation, Scaling};
pub use segment::{Crop, Permutate, Repeat, Resize};
pub use smooth::{Convolve, KernelWindow, Pool, PoolKind, Quantize};
pub use warp::RandomTimeWarp;
