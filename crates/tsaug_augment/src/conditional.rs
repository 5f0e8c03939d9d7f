//! Stochastic gating for augmenters.

use rand::{Rng, RngCore};

use tsaug_core::{CoreError, Result, Seed};

use crate::augmenter::Augmenter;

/// Decorator that applies a wrapped augmenter with a fixed probability.
///
/// Every invocation of [`augment_one`](Augmenter::augment_one) draws one
/// uniform value from the provided stream; when the draw is below the
/// configured probability the wrapped augmenter runs, otherwise the sample
/// passes through unchanged. In a batch every row draws independently, so
/// row inclusion decisions never correlate.
///
/// This satisfies [`Augmenter`] itself and therefore composes transparently
/// inside a pipeline. Gating lives here, never in the pipeline or in the
/// wrapped augmenter.
///
/// # Example
///
/// ```rust
/// use tsaug_augment::{ConditionalAugmenter, Drop};
///
/// // Blank out every point of roughly half the rows in a batch.
/// let gated = ConditionalAugmenter::new(Drop::new(1.0, None)?, 0.5)?;
/// # Ok::<(), tsaug_core::CoreError>(())
/// ```
pub struct ConditionalAugmenter {
    name: String,
    inner: Box<dyn Augmenter>,
    probability: f64,
    seed: Seed,
}

impl ConditionalAugmenter {
    /// Wrap an augmenter with an application probability in `[0, 1]`.
    pub fn new(inner: impl Augmenter + 'static, probability: f64) -> Result<Self> {
        Self::from_boxed(Box::new(inner), probability)
    }

    /// Wrap an already boxed augmenter, e.g. one built by the registry.
    pub fn from_boxed(inner: Box<dyn Augmenter>, probability: f64) -> Result<Self> {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(CoreError::Configuration(format!(
                "probability must be within [0, 1], got {probability}"
            )));
        }
        Ok(Self {
            name: format!("Conditional({})", inner.name()),
            inner,
            probability,
            seed: Seed::from_entropy(),
        })
    }

    /// The configured application probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Set the random seed used for gating draws in batch mode.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Augmenter for ConditionalAugmenter {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        if rng.gen::<f64>() < self.probability {
            self.inner.augment_one(x, rng)
        } else {
            Ok(x.to_vec())
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn seed(&self) -> Seed {
        self.seed
    }

    fn supports_per_sample_pipelining(&self) -> bool {
        self.inner.supports_per_sample_pipelining()
    }
}
