//! Ordered composition of augmenters.

use rand::RngCore;
use rayon::prelude::*;
use tracing::{debug, info_span};

use tsaug_core::{CoreError, Dataset, Result, Seed};

use crate::augmenter::{ensure_uniform, Augmenter};

/// An ordered pipeline of augmenters applied in sequence.
///
/// Insertion order is application order. A pipeline satisfies [`Augmenter`]
/// itself, so pipelines nest and can be gated with
/// [`ConditionalAugmenter`](crate::ConditionalAugmenter) like any other
/// stage.
///
/// # Example
///
/// ```rust
/// use tsaug_augment::{AugmentationPipeline, Crop, Jittering, Repeat};
/// use tsaug_core::Dataset;
///
/// let mut set = Dataset::new(vec![vec![1.0; 100]], vec!["1".into()])?;
///
/// let pipeline = AugmentationPipeline::new()
///     .add(Repeat::new(5)?)
///     .add(Crop::new(20)?)
///     .add(Jittering::new(0.2)?);
///
/// pipeline.execute(&mut set, true, false)?;
///
/// assert_eq!(set.n_samples(), 5);
/// assert_eq!(set.seq_len(), 20);
/// # Ok::<(), tsaug_core::CoreError>(())
/// ```
pub struct AugmentationPipeline {
    stages: Vec<Box<dyn Augmenter>>,
    seed: Seed,
}

impl AugmentationPipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            seed: Seed::from_entropy(),
        }
    }

    /// Append a stage, returning the pipeline for further appends.
    #[must_use]
    pub fn add(mut self, stage: impl Augmenter + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Append an already boxed stage, e.g. one built by the registry.
    #[must_use]
    pub fn add_boxed(mut self, stage: Box<dyn Augmenter>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append a stage through a mutable reference.
    pub fn push(&mut self, stage: impl Augmenter + 'static) {
        self.stages.push(Box::new(stage));
    }

    /// Set the seed for per-row streams in per-sample execution.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the pipeline over a dataset.
    ///
    /// With `per_sample == false` this is a strict staged pipeline: each
    /// stage's `augment_batch` runs to completion over all rows before the
    /// next stage starts, so stage N+1 always observes stage N's output;
    /// parallelism stays within a stage, never across stages.
    ///
    /// With `per_sample == true`, every stage must report
    /// [`supports_per_sample_pipelining`](Augmenter::supports_per_sample_pipelining);
    /// the check runs before any augmentation, and a failure leaves the
    /// dataset unmodified. When it passes, each row flows through all stages
    /// before the next row begins.
    ///
    /// Either way the call is all-or-nothing: on error the dataset keeps its
    /// input state.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PipelineCompatibility`] for an incompatible
    /// per-sample stage, and propagates stage errors otherwise.
    pub fn execute(&self, data: &mut Dataset, parallel: bool, per_sample: bool) -> Result<()> {
        let span = info_span!("pipeline", stages = self.stages.len(), parallel, per_sample);
        let _enter = span.enter();
        if per_sample {
            self.execute_per_sample(data, parallel)
        } else {
            self.execute_staged(data, parallel)
        }
    }

    fn execute_staged(&self, data: &mut Dataset, parallel: bool) -> Result<()> {
        let mut work = data.clone();
        for stage in &self.stages {
            debug!(stage = stage.name(), "applying stage");
            stage.augment_batch(&mut work, parallel)?;
        }
        *data = work;
        Ok(())
    }

    fn execute_per_sample(&self, data: &mut Dataset, parallel: bool) -> Result<()> {
        for stage in &self.stages {
            if !stage.supports_per_sample_pipelining() {
                return Err(CoreError::PipelineCompatibility {
                    stage: stage.name().to_string(),
                });
            }
        }

        let chain = |(i, row): (usize, &Vec<f64>)| -> Result<Vec<f64>> {
            let mut rng = self.seed.derive_index(i).to_rng();
            let mut current = row.clone();
            for stage in &self.stages {
                current = stage.augment_one(&current, &mut rng)?;
            }
            Ok(current)
        };

        let rows: Result<Vec<Vec<f64>>> = if parallel {
            data.features().par_iter().enumerate().map(chain).collect()
        } else {
            data.features().iter().enumerate().map(chain).collect()
        };

        let rows = rows?;
        ensure_uniform(&rows, "per-sample pipeline")?;
        data.set_features(rows)
    }
}

impl Default for AugmentationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Augmenter for AugmentationPipeline {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let mut current = x.to_vec();
        for stage in &self.stages {
            current = stage.augment_one(&current, rng)?;
        }
        Ok(current)
    }

    fn augment_batch(&self, data: &mut Dataset, parallel: bool) -> Result<()> {
        self.execute(data, parallel, false)
    }

    fn name(&self) -> &str {
        "AugmentationPipeline"
    }

    fn seed(&self) -> Seed {
        self.seed
    }

    fn supports_per_sample_pipelining(&self) -> bool {
        self.stages
            .iter()
            .all(|stage| stage.supports_per_sample_pipelining())
    }
}
