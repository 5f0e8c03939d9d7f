//! Resolution-reducing augmenters: convolution, pooling, quantization.

use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use tsaug_core::{CoreError, Result, Seed};

use crate::augmenter::Augmenter;

/// Kernel window shapes for [`Convolve`]. Closed set; configuration strings
/// parse through [`FromStr`] and unknown values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KernelWindow {
    /// Uniform moving-average kernel.
    Flat,
    /// Gaussian-weighted kernel.
    Gaussian,
}

impl FromStr for KernelWindow {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "gaussian" => Ok(Self::Gaussian),
            other => Err(CoreError::Configuration(format!(
                "unknown kernel window '{other}', expected one of: flat, gaussian"
            ))),
        }
    }
}

/// Augmenter that smooths each series by convolving it with a kernel window.
///
/// The kernel is normalized to sum to one and built once at construction.
/// Rows shorter than the kernel pass through unchanged.
pub struct Convolve {
    window: KernelWindow,
    kernel: Vec<f64>,
    seed: Seed,
}

impl Convolve {
    /// Create a convolve augmenter with the given window shape and size.
    pub fn new(window: KernelWindow, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CoreError::Configuration(
                "kernel size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            window,
            kernel: Self::make_kernel(window, size),
            seed: Seed::from_entropy(),
        })
    }

    /// The configured window shape.
    #[must_use]
    pub fn window(&self) -> KernelWindow {
        self.window
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    fn make_kernel(window: KernelWindow, n: usize) -> Vec<f64> {
        match window {
            KernelWindow::Flat => vec![1.0 / n as f64; n],
            KernelWindow::Gaussian => {
                let sigma = 0.3 * ((n - 1) as f64) * 0.5 + 0.8;
                let mid = (n as f64 - 1.0) / 2.0;
                let mut kernel = Vec::with_capacity(n);
                for i in 0..n {
                    let x = i as f64 - mid;
                    kernel.push((-0.5 * (x / sigma).powi(2)).exp());
                }
                let sum: f64 = kernel.iter().sum();
                kernel.iter_mut().for_each(|v| *v /= sum);
                kernel
            }
        }
    }
}

impl Augmenter for Convolve {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let k = self.kernel.len();
        let len = x.len();
        if len < k {
            return Ok(x.to_vec());
        }

        let half = k / 2;
        let mut out = vec![0.0; len];
        for (i, slot) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (offset, weight) in self.kernel.iter().enumerate() {
                // Centered kernel with implicit zero padding at the edges.
                let j = i + offset;
                if j >= half && j - half < len {
                    acc += x[j - half] * weight;
                }
            }
            *slot = acc;
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "Convolve"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Pooling functions for [`Pool`]. Closed set; configuration strings parse
/// through [`FromStr`] and unknown values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolKind {
    /// Keep the block maximum.
    Max,
    /// Keep the block minimum.
    Min,
    /// Keep the block mean.
    Average,
}

impl FromStr for PoolKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "average" | "mean" => Ok(Self::Average),
            other => Err(CoreError::Configuration(format!(
                "unknown pooling kind '{other}', expected one of: max, min, average"
            ))),
        }
    }
}

/// Augmenter that reduces temporal resolution without changing the length,
/// replacing each block of `size` values with a single pooled value.
///
/// A trailing partial block pools over the values it has.
pub struct Pool {
    kind: PoolKind,
    size: usize,
    seed: Seed,
}

impl Pool {
    /// Create a pool augmenter with the given function and block size.
    pub fn new(kind: PoolKind, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CoreError::Configuration(
                "pool size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            kind,
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

impl Augmenter for Pool {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let mut out = x.to_vec();
        for block in out.chunks_mut(self.size) {
            let pooled = match self.kind {
                PoolKind::Max => block.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                PoolKind::Min => block.iter().copied().fold(f64::INFINITY, f64::min),
                PoolKind::Average => block.iter().sum::<f64>() / block.len() as f64,
            };
            block.fill(pooled);
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "Pool"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}

/// Augmenter that quantizes each series to a level set built by uniformly
/// discretizing the range of that series into `levels` steps.
pub struct Quantize {
    levels: usize,
    seed: Seed,
}

impl Quantize {
    /// Create a quantize augmenter with the given number of levels.
    pub fn new(levels: usize) -> Result<Self> {
        if levels == 0 {
            return Err(CoreError::Configuration(
                "quantize levels must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            levels,
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

impl Augmenter for Quantize {
    fn augment_one(&self, x: &[f64], _rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        if x.is_empty() {
            return Ok(Vec::new());
        }
        let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = x.iter().copied().fold(f64::INFINITY, f64::min);
        let step = (max - min) / self.levels as f64;
        let level_set: Vec<f64> = (0..self.levels)
            .map(|level| min + level as f64 * step)
            .collect();

        Ok(x.iter()
            .map(|v| {
                let mut nearest = level_set[0];
                let mut best = (nearest - v).abs();
                for &l in &level_set[1..] {
                    let d = (l - v).abs();
                    if d < best {
                        best = d;
                        nearest = l;
                    }
                }
                nearest
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Quantize"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}
