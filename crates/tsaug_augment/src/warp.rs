//! Time-axis warping augmenters.

use rand::{Rng, RngCore};

use tsaug_core::{CoreError, Result, Seed};

use crate::augmenter::Augmenter;

/// Augmenter that warps the time axis inside a randomly chosen window.
///
/// For every series, a contiguous window of `window_size` points is selected
/// at a random position and resampled at a speed ratio drawn from
/// `speed_ratio_range`, compressing or stretching it in time. The modified
/// sequence is then linearly resampled back to the original length, so the
/// row length never changes.
///
/// Clamp policy: a `window_size` of zero or one exceeding the series length
/// warps the whole series.
pub struct RandomTimeWarp {
    window_size: usize,
    speed_ratio_range: (f64, f64),
    seed: Seed,
}

impl RandomTimeWarp {
    /// Create a time warp augmenter.
    ///
    /// `speed_ratio_range` gives the minimum and maximum speed change, e.g.
    /// `(0.5, 2.0)` for anything between half and double speed.
    pub fn new(window_size: usize, speed_ratio_range: (f64, f64)) -> Result<Self> {
        let (lo, hi) = speed_ratio_range;
        if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || lo > hi {
            return Err(CoreError::Configuration(format!(
                "speed ratio range requires 0 < min <= max, got ({lo}, {hi})"
            )));
        }
        Ok(Self {
            window_size,
            speed_ratio_range,
            seed: Seed::from_entropy(),
        })
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Resample `window` to `target_len` points by linear interpolation.
    fn resample(window: &[f64], target_len: usize) -> Vec<f64> {
        let len = window.len();
        if len < 2 || target_len < 2 {
            return vec![window[0]; target_len.max(1)];
        }
        (0..target_len)
            .map(|i| {
                let pos = i as f64 / (target_len - 1) as f64 * (len - 1) as f64;
                let lo = pos.floor() as usize;
                let hi = (lo + 1).min(len - 1);
                let frac = pos - lo as f64;
                window[lo] * (1.0 - frac) + window[hi] * frac
            })
            .collect()
    }
}

impl Augmenter for RandomTimeWarp {
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let len = x.len();
        if len < 2 {
            return Ok(x.to_vec());
        }

        let (window_start, window_end) = if self.window_size == 0 || self.window_size >= len {
            (0, len)
        } else {
            let start = rng.gen_range(0..=len - self.window_size);
            (start, start + self.window_size)
        };

        let (lo, hi) = self.speed_ratio_range;
        let ratio = rng.gen_range(lo..=hi);

        // Speed up or slow down the window, then bring the spliced sequence
        // back to the original length.
        let window = &x[window_start..window_end];
        let warped_len = ((window.len() as f64 * ratio).round() as usize).max(1);
        let warped = Self::resample(window, warped_len);

        let mut spliced = Vec::with_capacity(len - window.len() + warped.len());
        spliced.extend_from_slice(&x[..window_start]);
        spliced.extend_from_slice(&warped);
        spliced.extend_from_slice(&x[window_end..]);

        Ok(Self::resample(&spliced, len))
    }

    fn name(&self) -> &str {
        "RandomTimeWarp"
    }

    fn seed(&self) -> Seed {
        self.seed
    }
}
