//! Structural augmenters: cropping, permutation, repetition, resizing.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use tsaug_core::{CoreError, Dataset, Result, Seed};

use crate::augmenter::Augmenter;

/// Augmenter that crops each row to a random contiguous slice of `size`.
///
/// Clamp policy: rows shorter than or equal to `size` pass through
/// unchanged. Since all rows of a dataset share one length, batch output is
/// always uniform at `min(size, seq_len)`.
pub struct Crop {
    size: usize,
    seed: Seed,
}

impl Crop {
    /// Create a crop augmenter with the given target size.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CoreError::Configuration(
                "crop size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            size,
            seed: Seed::from_entropy(),
        })
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Augmenter for Crop {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let n = x.len();
        if self.size >= n {
            return Ok(x.to_vec());
        }
        let start = rng.gen_range(0..=n - self.size);
        Ok(x[start..start + self.size].to_vec())
    }

    fn name(&self) -> &str {
        "Crop"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that slices each series into windows, then shuffles the
/// segments inside every window.
///
/// Canonical signature is `(window_size, segment_size)`; trailing partial
/// windows and segments are shuffled as-is, so the row length never changes.
pub struct Permutate {
    window_size: usize,
    segment_size: usize,
    seed: Seed,
}

impl Permutate {
    /// Create a permutate augmenter.
    pub fn new(window_size: usize, segment_size: usize) -> Result<Self> {
        if window_size == 0 || segment_size == 0 {
            return Err(CoreError::Configuration(format!(
                "permutate window_size and segment_size must be at least 1, got ({window_size}, {segment_size})"
            )));
        }
        Ok(Self {
            window_size,
            segment_size,
            seed: Seed::from_entropy(),
        })
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Augmenter for Permutate {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let mut res = Vec::with_capacity(x.len());
        for window in x.chunks(self.window_size) {
            let mut segments = window.chunks(self.segment_size).collect::<Vec<_>>();
            segments.shuffle(rng);
            for segment in segments {
                res.extend_from_slice(segment);
            }
        }
        Ok(res)
    }

    fn name(&self) -> &str {
        "Permutate"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that tiles the whole dataset `times` times.
///
/// Labels expand in the same block order as the feature rows: labels
/// `[a, b]` with `times = 2` become `[a, b, a, b]`, aligned with the
/// duplicated rows. Needs the batch-level view, so it reports
/// `supports_per_sample_pipelining() == false`, and its single-sample form
/// is the identity.
pub struct Repeat {
    times: usize,
    seed: Seed,
}

impl Repeat {
    /// Create a repeat augmenter.
    pub fn new(times: usize) -> Result<Self> {
        if times == 0 {
            return Err(CoreError::Configuration(
                "repeat times must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            times,
            seed: Seed::from_entropy(),
        })
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Augmenter for Repeat {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(x.to_vec())
    }

    fn augment_batch(&self, data: &mut Dataset, _parallel: bool) -> Result<()> {
        let n = data.n_samples();
        let mut features = Vec::with_capacity(n * self.times);
        let mut labels = Vec::with_capacity(n * self.times);
        for _ in 0..self.times {
            features.extend(data.features().iter().cloned());
            labels.extend(data.labels().iter().cloned());
        }
        data.replace(features, labels)
    }

    fn name(&self) -> &str {
        "Repeat"
    }

    fn seed(&self) -> Seed {
        self.seed
    }

    fn supports_per_sample_pipelining(&self) -> bool {
        false
    }
}

/// Augmenter that changes the temporal resolution by re-sampling each row to
/// a fixed length using nearest-index lookup, without interpolation.
pub struct Resize {
    size: usize,
    seed: Seed,
}

impl Resize {
    /// Create a resize augmenter with the given target length.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CoreError::Configuration(
                "resize size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            size,
            seed: Seed::from_entropy(),
        })
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Augmenter for Resize {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let n = x.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        let ratio = n as f64 / self.size as f64;
        Ok((0..self.size)
            .map(|i| x[((i as f64 * ratio) as usize).min(n - 1)])
            .collect())
    }

    fn name(&self) -> &str {
        "Resize"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}
