//! Frequency-domain augmenters.
//!
//! Both augmenters in this module operate on rows holding interleaved
//! complex spectra `[re0, im0, re1, im1, ...]` as produced by
//! [`tsaug_spectral::dataset_fft`]. With `time_domain` enabled, their batch
//! form transforms the whole dataset into the frequency domain first,
//! perturbs it there, and transforms it back; that round-trip needs the
//! batch-level view, so they report `supports_per_sample_pipelining() ==
//! false` in that mode.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

use tsaug_core::{CoreError, Dataset, Result, Seed};
use tsaug_spectral::{dataset_fft, dataset_ifft};

use crate::augmenter::{apply_rows, Augmenter};

/// Augmenter that adds gaussian noise to each frequency bin's magnitude and
/// phase.
pub struct AmplitudePhasePerturbation {
    magnitude_noise: Normal<f64>,
    phase_noise: Normal<f64>,
    time_domain: bool,
    seed: Seed,
}

impl AmplitudePhasePerturbation {
    /// Create an amplitude/phase perturbation augmenter.
    ///
    /// With `time_domain`, batch input is taken as time-domain rows and run
    /// through an FFT/IFFT round-trip around the perturbation.
    pub fn new(magnitude_std: f64, phase_std: f64, time_domain: bool) -> Result<Self> {
        let magnitude_noise = Normal::new(0.0, magnitude_std).map_err(|e| {
            CoreError::Configuration(format!("invalid magnitude_std {magnitude_std}: {e}"))
        })?;
        let phase_noise = Normal::new(0.0, phase_std)
            .map_err(|e| CoreError::Configuration(format!("invalid phase_std {phase_std}: {e}")))?;
        Ok(Self {
            magnitude_noise,
            phase_noise,
            time_domain,
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

impl Augmenter for AmplitudePhasePerturbation {
    /// Perturb one row of interleaved frequency coefficients.
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let num_bins = x.len() / 2;
        let mut out = x.to_vec();

        for bin in 0..num_bins {
            let re_idx = 2 * bin;
            let im_idx = 2 * bin + 1;
            let re = out[re_idx];
            let im = out[im_idx];

            let mag = (re * re + im * im).sqrt();
            let phase = im.atan2(re);

            let mag_perturbed = (mag + self.magnitude_noise.sample(rng)).max(0.0);
            let phase_perturbed = phase + self.phase_noise.sample(rng);

            out[re_idx] = mag_perturbed * phase_perturbed.cos();
            out[im_idx] = mag_perturbed * phase_perturbed.sin();
        }

        Ok(out)
    }

    fn augment_batch(&self, data: &mut Dataset, parallel: bool) -> Result<()> {
        if self.time_domain {
            let mut freq = dataset_fft(data, parallel)?;
            apply_rows(self, &mut freq, parallel)?;
            *data = dataset_ifft(&freq, parallel)?;
            Ok(())
        } else {
            apply_rows(self, data, parallel)
        }
    }

    fn name(&self) -> &str {
        "AmplitudePhasePerturbation"
    }

    fn seed(&self) -> Seed {
        self.seed
    }

    fn supports_per_sample_pipelining(&self) -> bool {
        // The time-domain mode wraps the batch in an FFT/IFFT round-trip.
        !self.time_domain
    }
}

/// Augmenter that zeroes a random contiguous band of frequency bins.
pub struct FrequencyMask {
    mask_width: usize,
    time_domain: bool,
    seed: Seed,
}

impl FrequencyMask {
    /// Create a frequency mask augmenter masking `mask_width` bins.
    ///
    /// With `time_domain`, batch input is taken as time-domain rows and run
    /// through an FFT/IFFT round-trip around the masking.
    pub fn new(mask_width: usize, time_domain: bool) -> Result<Self> {
        if mask_width == 0 {
            return Err(CoreError::Configuration(
                "mask width must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            mask_width,
            time_domain,
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

impl Augmenter for FrequencyMask {
    /// Zero a random band in one row of interleaved frequency coefficients.
    ///
    /// Rows with fewer bins than the mask width pass through unchanged.
    fn augment_one(&self, x: &[f64], rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        let num_bins = x.len() / 2;
        if num_bins < self.mask_width {
            return Ok(x.to_vec());
        }

        let mut out = x.to_vec();
        let start = rng.gen_range(0..=num_bins - self.mask_width);
        for bin in start..start + self.mask_width {
            out[2 * bin] = 0.0;
            out[2 * bin + 1] = 0.0;
        }
        Ok(out)
    }

    fn augment_batch(&self, data: &mut Dataset, parallel: bool) -> Result<()> {
        if self.time_domain {
            let mut freq = dataset_fft(data, parallel)?;
            apply_rows(self, &mut freq, parallel)?;
            *data = dataset_ifft(&freq, parallel)?;
            Ok(())
        } else {
            apply_rows(self, data, parallel)
        }
    }

    fn name(&self) -> &str {
        "FrequencyMask"
    }

    fn seed(&self) -> Seed {
        self.seed
    }

    fn supports_per_sample_pipelining(&self) -> bool {
        !self.time_domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> rand_chacha::ChaCha8Rng {
        Seed::new(5).to_rng()
    }

    #[test]
    fn test_app_perturbs_frequency_rows() {
        let mut set = Dataset::new(
            vec![vec![1.0, 0.0].repeat(16), vec![2.0, 0.0].repeat(16)],
            vec!["a".into(), "b".into()],
        )
        .unwrap();
        let original = set.features()[0].clone();

        let app = AmplitudePhasePerturbation::new(0.1, 0.1, false).unwrap();
        app.augment_batch(&mut set, false).unwrap();

        assert_ne!(set.features()[0], original);
        assert_eq!(set.seq_len(), 32);
    }

    #[test]
    fn test_app_time_domain_round_trip() {
        let mut set = Dataset::new(
            vec![vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]],
            vec!["A".into(), "B".into()],
        )
        .unwrap();
        let original = set.features()[0].clone();

        let app = AmplitudePhasePerturbation::new(0.1, 0.1, true).unwrap();
        app.augment_batch(&mut set, false).unwrap();

        assert_ne!(set.features()[0], original);
        // Row length and labels survive the FFT/IFFT round-trip.
        assert_eq!(set.seq_len(), 3);
        assert_eq!(set.labels(), &["A", "B"]);
    }

    #[test]
    fn test_app_time_domain_disables_per_sample() {
        let app = AmplitudePhasePerturbation::new(0.1, 0.1, true).unwrap();
        assert!(!app.supports_per_sample_pipelining());
        let app = AmplitudePhasePerturbation::new(0.1, 0.1, false).unwrap();
        assert!(app.supports_per_sample_pipelining());
    }

    #[test]
    fn test_mask_zeroes_band() {
        let row: Vec<f64> = (1..=16).map(f64::from).collect();
        let mask = FrequencyMask::new(3, false).unwrap();
        let out = mask.augment_one(&row, &mut rng()).unwrap();

        assert_eq!(out.len(), row.len());
        let zeroed = out.iter().filter(|&&v| v == 0.0).count();
        assert_eq!(zeroed, 6);
    }

    #[test]
    fn test_mask_wider_than_spectrum_passes_through() {
        let row = vec![1.0, 2.0, 3.0, 4.0];
        let mask = FrequencyMask::new(5, false).unwrap();
        let out = mask.augment_one(&row, &mut rng()).unwrap();
        assert_eq!(out, row);
    }
}
