//! Discrete Fourier transform over dataset rows.

use rustfft::{num_complex::Complex, FftPlanner};

use tsaug_core::{Dataset, Result};

use crate::map_rows;

/// Forward FFT applied independently per row.
///
/// Each output row holds the complex spectrum interleaved as
/// `[re0, im0, re1, im1, ...]`, so the row length doubles. Labels are
/// carried over unchanged. The caller is responsible for not mixing
/// time-domain and frequency-domain datasets.
pub fn dataset_fft(dataset: &Dataset, parallel: bool) -> Result<Dataset> {
    let len = dataset.seq_len();
    if dataset.is_empty() || len == 0 {
        return Ok(dataset.clone());
    }

    let fft = FftPlanner::new().plan_fft_forward(len);
    let features = map_rows(dataset.features(), parallel, |sample| {
        let mut buffer: Vec<Complex<f64>> =
            sample.iter().map(|&x| Complex { re: x, im: 0.0 }).collect();
        fft.process(&mut buffer);
        let mut spectrum = Vec::with_capacity(2 * len);
        for c in buffer {
            spectrum.push(c.re);
            spectrum.push(c.im);
        }
        spectrum
    });

    Dataset::new(features, dataset.labels().to_vec())
}

/// Inverse FFT reconstructing time-domain rows from interleaved spectra.
///
/// Input rows are read as `[re0, im0, re1, im1, ...]`; each output row has
/// half the input length and holds the real part of the inverse transform,
/// normalized by `1/N`.
pub fn dataset_ifft(dataset: &Dataset, parallel: bool) -> Result<Dataset> {
    let len = dataset.seq_len() / 2;
    if dataset.is_empty() || len == 0 {
        return Ok(dataset.clone());
    }

    let ifft = FftPlanner::new().plan_fft_inverse(len);
    let features = map_rows(dataset.features(), parallel, |sample| {
        let mut buffer: Vec<Complex<f64>> = (0..len)
            .map(|i| Complex {
                re: sample[2 * i],
                im: sample[2 * i + 1],
            })
            .collect();
        ifft.process(&mut buffer);
        buffer.iter().map(|c| c.re / len as f64).collect()
    });

    Dataset::new(features, dataset.labels().to_vec())
}
