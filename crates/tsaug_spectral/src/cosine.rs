//! Discrete cosine transform over dataset rows.

use rustdct::DctPlanner;

use tsaug_core::{Dataset, Result};

use crate::map_rows;

/// DCT-II applied independently per row; row length is preserved.
pub fn dataset_dct(dataset: &Dataset, parallel: bool) -> Result<Dataset> {
    let len = dataset.seq_len();
    if dataset.is_empty() || len == 0 {
        return Ok(dataset.clone());
    }

    let dct = DctPlanner::new().plan_dct2(len);
    let features = map_rows(dataset.features(), parallel, |sample| {
        let mut buffer = sample.to_vec();
        dct.process_dct2(&mut buffer);
        buffer
    });

    Dataset::new(features, dataset.labels().to_vec())
}

/// DCT-III (the inverse of DCT-II) applied independently per row.
///
/// Output values are scaled by `2/N` so that `idct(dct(x))` reproduces `x`.
pub fn dataset_idct(dataset: &Dataset, parallel: bool) -> Result<Dataset> {
    let len = dataset.seq_len();
    if dataset.is_empty() || len == 0 {
        return Ok(dataset.clone());
    }

    let idct = DctPlanner::new().plan_dct3(len);
    let features = map_rows(dataset.features(), parallel, |sample| {
        let mut buffer = sample.to_vec();
        idct.process_dct3(&mut buffer);
        let norm = 2.0 / len as f64;
        for v in &mut buffer {
            *v *= norm;
        }
        buffer
    });

    Dataset::new(features, dataset.labels().to_vec())
}
