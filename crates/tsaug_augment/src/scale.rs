//! Value-space augmenters: scaling, rotation, reversal, and drift.

use rand::{Rng, RngCore};

use tsaug_core::{CoreError, Result, Seed};

use crate::augmenter::Augmenter;

/// Augmenter that scales a series by one random scalar drawn per series.
pub struct Scaling {
    min_factor: f64,
    max_factor: f64,
    seed: Seed,
}

impl Scaling {
    /// Create a scaling augmenter drawing from `[min, max]` (inclusive).
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(CoreError::Configuration(format!(
                "scaling requires finite factors with min <= max, got ({min}, {max})"
            )));
        }
        Ok(Self {
            min_factor: min,
            max_factor: max,
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

impl Augmenter for Scaling {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let scalar = rng.gen_range(self.min_factor..=self.max_factor);
        Ok(x.iter().map(|val| val * scalar).collect())
    }

    fn name(&self) -> &str {
        "Scaling"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that rotates the data 180 degrees around an anchor value,
/// mapping `v` to `2 * anchor - v`.
pub struct Rotation {
    anchor: f64,
    seed: Seed,
}

impl Rotation {
    /// Create a rotation augmenter around the given anchor.
    pub fn new(anchor: f64) -> Result<Self> {
        if !anchor.is_finite() {
            return Err(CoreError::Configuration(format!(
                "rotation anchor must be finite, got {anchor}"
            )));
        }
        Ok(Self {
            anchor,
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

impl Augmenter for Rotation {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(x.iter().map(|val| 2.0 * self.anchor - val).collect())
    }

    fn name(&self) -> &str {
        "Rotation"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that reverses the time axis, turning `[1, 2, 3]` into `[3, 2, 1]`.
pub struct Reverse {
    seed: Seed,
}

impl Reverse {
    /// Create a reverse augmenter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: Seed::from_entropy(),
        }
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for Reverse {
    fn default() -> Self {
        Self::new()
    }
}

impl Augmenter for Reverse {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(x.iter().rev().copied().collect())
    }

    fn name(&self) -> &str {
        "Reverse"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that adds a smooth random drift to the series.
///
/// A random walk is sampled at `n_drift_points` knots, each step drawn from
/// `[-max_drift, max_drift]`, and linearly interpolated across the series.
/// With `max_drift == 0` the series is unchanged.
pub struct Drift {
    max_drift: f64,
    n_drift_points: usize,
    seed: Seed,
}

impl Drift {
    /// Create a drift augmenter.
    pub fn new(max_drift: f64, n_drift_points: usize) -> Result<Self> {
        if !max_drift.is_finite() || max_drift < 0.0 {
            return Err(CoreError::Configuration(format!(
                "max_drift must be finite and non-negative, got {max_drift}"
            )));
        }
        if n_drift_points < 2 {
            return Err(CoreError::Configuration(format!(
                "n_drift_points must be at least 2, got {n_drift_points}"
            )));
        }
        Ok(Self {
            max_drift,
            n_drift_points,
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

impl Augmenter for Drift {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let len = x.len();
        if len < 2 {
            return Ok(x.to_vec());
        }

        // Random walk over the knots, anchored at zero.
        let n = self.n_drift_points;
        let mut knots = Vec::with_capacity(n);
        let mut level = 0.0;
        knots.push(level);
        for _ in 1..n {
            level += rng.gen_range(-self.max_drift..=self.max_drift);
            knots.push(level);
        }

        let out = x
            .iter()
            .enumerate()
            .map(|(t, val)| {
                let pos = t as f64 / (len - 1) as f64 * (n - 1) as f64;
                let lo = pos.floor() as usize;
                let hi = (lo + 1).min(n - 1);
                let frac = pos - lo as f64;
                let offset = knots[lo] * (1.0 - frac) + knots[hi] * frac;
                val + offset
            })
            .collect();

        Ok(out)
    }

    fn name(&self) -> &str {
        "Drift"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}
