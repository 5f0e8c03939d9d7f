//! Labeled univariate time series datasets.

use ndarray::Array2;

use crate::error::{CoreError, Result};

/// A batch of univariate time series with one label per series.
///
/// All rows share the same length at any point in time; a row-length-changing
/// operation (crop, resize) must change every row to the same new length.
/// The row/label pairing is validated at construction and after every
/// structural mutation, so `features.len() == labels.len()` always holds.
///
/// Cloning produces an independent deep copy, which benchmarking callers use
/// to compare pre/post augmentation state.
///
/// # Example
///
/// ```rust
/// use tsaug_core::Dataset;
///
/// let set = Dataset::new(
///     vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
///     vec!["0".into(), "1".into()],
/// )?;
/// assert_eq!(set.n_samples(), 2);
/// assert_eq!(set.seq_len(), 3);
/// # Ok::<(), tsaug_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<String>,
}

fn check_uniform(rows: &[Vec<f64>]) -> Result<()> {
    if let Some(first) = rows.first() {
        let len = first.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != len {
                return Err(CoreError::ShapeMismatch(format!(
                    "row 0 has length {} but row {} has length {}",
                    len,
                    i,
                    row.len()
                )));
            }
        }
    }
    Ok(())
}

impl Dataset {
    /// Create a dataset from feature rows and index-aligned labels.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShapeMismatch`] when the row and label counts
    /// differ or the rows are not uniform in length.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<String>) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(CoreError::ShapeMismatch(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        check_uniform(&features)?;
        Ok(Self { features, labels })
    }

    /// Create a dataset from a 2-D array, one series per array row.
    ///
    /// This is the boundary constructor for external data loaders that
    /// produce `(2D float array, label array)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShapeMismatch`] when the array row count and
    /// label count differ.
    pub fn from_array2(x: &Array2<f64>, labels: Vec<String>) -> Result<Self> {
        let features = x.rows().into_iter().map(|row| row.to_vec()).collect();
        Self::new(features, labels)
    }

    /// Export the feature matrix as a 2-D array.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShapeMismatch`] when the rows cannot form a
    /// rectangular array (never the case for a dataset that only went
    /// through engine operations).
    pub fn to_array2(&self) -> Result<Array2<f64>> {
        let n = self.n_samples();
        let len = self.seq_len();
        let flat: Vec<f64> = self.features.iter().flatten().copied().collect();
        Array2::from_shape_vec((n, len), flat)
            .map_err(|e| CoreError::ShapeMismatch(format!("not rectangular: {e}")))
    }

    /// Number of series in the dataset.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.features.len()
    }

    /// Check whether the dataset has no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Length of every series; zero for an empty dataset.
    #[must_use]
    pub fn seq_len(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    /// Read access to the feature rows.
    #[must_use]
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// Read access to the labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Value-level write access to one row.
    ///
    /// The returned slice cannot change the row's length, so the uniformity
    /// invariant is preserved.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut [f64]> {
        self.features.get_mut(index).map(Vec::as_mut_slice)
    }

    /// Value-level write access to every row.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> {
        self.features.iter_mut().map(Vec::as_mut_slice)
    }

    /// Value-level write access to the labels.
    pub fn labels_mut(&mut self) -> &mut [String] {
        &mut self.labels
    }

    /// Replace the feature rows, keeping the existing labels.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShapeMismatch`] when the new row count differs
    /// from the label count or the rows are not uniform in length. The
    /// dataset is untouched on error.
    pub fn set_features(&mut self, features: Vec<Vec<f64>>) -> Result<()> {
        if features.len() != self.labels.len() {
            return Err(CoreError::ShapeMismatch(format!(
                "{} feature rows but {} labels",
                features.len(),
                self.labels.len()
            )));
        }
        check_uniform(&features)?;
        self.features = features;
        Ok(())
    }

    /// Replace feature rows and labels together, for operations that change
    /// the row count.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShapeMismatch`] when the new counts differ or
    /// the rows are not uniform in length. The dataset is untouched on error.
    pub fn replace(&mut self, features: Vec<Vec<f64>>, labels: Vec<String>) -> Result<()> {
        if features.len() != labels.len() {
            return Err(CoreError::ShapeMismatch(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        check_uniform(&features)?;
        self.features = features;
        self.labels = labels;
        Ok(())
    }
}
