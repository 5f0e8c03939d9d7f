//! Noise injection augmenters.

use std::str::FromStr;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

use tsaug_core::{CoreError, Result, Seed};

use crate::augmenter::Augmenter;

/// The kind of noise injected by [`AddNoise`]. Closed set; configuration
/// strings parse through [`FromStr`] and unknown values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseKind {
    /// Uniform noise within fixed bounds, added per element.
    Uniform,
    /// Gaussian noise with fixed mean and standard deviation, per element.
    Gaussian,
    /// A single spike at a random position, scaled by the series deviation.
    Spike,
    /// A linear trend with a random slope.
    Slope,
}

impl FromStr for NoiseKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "gaussian" => Ok(Self::Gaussian),
            "spike" => Ok(Self::Spike),
            "slope" => Ok(Self::Slope),
            other => Err(CoreError::Configuration(format!(
                "unknown noise kind '{other}', expected one of: uniform, gaussian, spike, slope"
            ))),
        }
    }
}

#[derive(Clone, Copy)]
enum NoiseModel {
    Uniform(Uniform<f64>),
    Gaussian(Normal<f64>),
    Spike { low: f64, high: f64 },
    Slope { low: f64, high: f64 },
}

fn check_range(what: &str, low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(CoreError::Configuration(format!(
            "{what} requires finite bounds with low < high, got ({low}, {high})"
        )));
    }
    Ok(())
}

/// Augmenter that injects noise of a configurable [`NoiseKind`].
///
/// Each kind has its own constructor so that the required parameters are
/// validated up front; there are no optional parameter slots to get wrong at
/// call time.
pub struct AddNoise {
    kind: NoiseKind,
    model: NoiseModel,
    seed: Seed,
}

impl AddNoise {
    /// Uniform noise in `[low, high)` added to every element.
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        check_range("uniform noise", low, high)?;
        Ok(Self {
            kind: NoiseKind::Uniform,
            model: NoiseModel::Uniform(Uniform::new(low, high)),
            seed: Seed::from_entropy(),
        })
    }

    /// Gaussian noise with the given mean and standard deviation, per element.
    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self> {
        let dist = Normal::new(mean, std_dev).map_err(|e| {
            CoreError::Configuration(format!(
                "invalid gaussian noise parameters (mean {mean}, std_dev {std_dev}): {e}"
            ))
        })?;
        Ok(Self {
            kind: NoiseKind::Gaussian,
            model: NoiseModel::Gaussian(dist),
            seed: Seed::from_entropy(),
        })
    }

    /// One spike at a random index, with magnitude drawn from `[low, high)`
    /// times the standard deviation of the series.
    pub fn spike(low: f64, high: f64) -> Result<Self> {
        check_range("spike noise", low, high)?;
        Ok(Self {
            kind: NoiseKind::Spike,
            model: NoiseModel::Spike { low, high },
            seed: Seed::from_entropy(),
        })
    }

    /// A linear trend with slope drawn from `[low, high)`.
    pub fn slope(low: f64, high: f64) -> Result<Self> {
        check_range("slope noise", low, high)?;
        Ok(Self {
            kind: NoiseKind::Slope,
            model: NoiseModel::Slope { low, high },
            seed: Seed::from_entropy(),
        })
    }

    /// The configured noise kind.
    #[must_use]
    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Augmenter for AddNoise {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        match self.model {
            NoiseModel::Uniform(dist) => {
                Ok(x.iter().map(|val| val + dist.sample(rng)).collect())
            }
            NoiseModel::Gaussian(dist) => {
                Ok(x.iter().map(|val| val + dist.sample(rng)).collect())
            }
            NoiseModel::Spike { low, high } => {
                if x.is_empty() {
                    return Ok(Vec::new());
                }
                let n = x.len() as f64;
                let mean = x.iter().sum::<f64>() / n;
                let std_dev =
                    (x.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / n).sqrt();

                let idx = rng.gen_range(0..x.len());
                let magnitude = rng.gen_range(low..high);

                let mut res = x.to_vec();
                res[idx] = magnitude * std_dev;
                Ok(res)
            }
            NoiseModel::Slope { low, high } => {
                let slope = rng.gen_range(low..high);
                Ok(x.iter()
                    .enumerate()
                    .map(|(i, val)| val + i as f64 * slope)
                    .collect())
            }
        }
    }

    fn name(&self) -> &str {
        "AddNoise"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that adds white gaussian noise with a mean of zero.
pub struct Jittering {
    dist: Normal<f64>,
    seed: Seed,
}

impl Jittering {
    /// Create a jittering augmenter with the given standard deviation.
    pub fn new(std_dev: f64) -> Result<Self> {
        let dist = Normal::new(0.0, std_dev).map_err(|e| {
            CoreError::Configuration(format!("invalid jittering std_dev {std_dev}: {e}"))
        })?;
        Ok(Self {
            dist,
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

impl Augmenter for Jittering {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(x.iter().map(|val| val + self.dist.sample(rng)).collect())
    }

    fn name(&self) -> &str {
        "Jittering"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that drops data points, replacing each with a fill value.
///
/// Every element is independently replaced with probability `percentage`.
pub struct Drop {
    percentage: f64,
    fill: f64,
    seed: Seed,
}

impl Drop {
    /// Create a drop augmenter. `fill` defaults to `0.0` when `None`.
    pub fn new(percentage: f64, fill: Option<f64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&percentage) {
            return Err(CoreError::Configuration(format!(
                "drop percentage must be within [0, 1], got {percentage}"
            )));
        }
        Ok(Self {
            percentage,
            fill: fill.unwrap_or(0.0),
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

impl Augmenter for Drop {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        Ok(x.iter()
            .map(|val| {
                if rng.gen::<f64>() < self.percentage {
                    self.fill
                } else {
                    *val
                }
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Drop"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}
