use crate::error::DatasetError;

/// Maximum number of observations a [`Dataset`] may hold.
pub const MAX_OBSERVATIONS: usize = 30;

/// A validated, immutable sequence of observations.
///
/// Construction enforces the invariants every calculator relies on: between
/// 1 and [`MAX_OBSERVATIONS`] values, all finite. The values are kept in
/// entry order alongside a sorted copy, since every order statistic (median,
/// quartiles, percentiles) needs the sorted view.
///
/// A dataset never changes after construction; editing the input produces a
/// new dataset.
///
/// # Examples
///
/// ```
/// use statlab_stats::Dataset;
///
/// let data = Dataset::new([5.0, 2.0, 8.0])?;
/// assert_eq!(data.n(), 3);
/// assert_eq!(data.sorted(), &[2.0, 5.0, 8.0]);
/// assert_eq!(data.min(), 2.0);
/// assert_eq!(data.max(), 8.0);
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl Dataset {
    /// Validates and wraps a sequence of observations.
    ///
    /// # Errors
    ///
    /// * [`DatasetError::Empty`] if no values are given
    /// * [`DatasetError::TooManyValues`] past the [`MAX_OBSERVATIONS`] cap
    /// * [`DatasetError::NonFinite`] on NaN or infinite values
    pub fn new<I>(values: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return Err(DatasetError::Empty);
        }
        if values.len() > MAX_OBSERVATIONS {
            return Err(DatasetError::TooManyValues {
                max: MAX_OBSERVATIONS,
                count: values.len(),
            });
        }
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(DatasetError::NonFinite { value });
        }

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { values, sorted })
    }

    /// Number of observations (always ≥ 1).
    #[must_use]
    pub fn n(&self) -> usize {
        self.values.len()
    }

    /// Observations in entry order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observations sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Smallest observation.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest observation.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Sum of all observations.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Dataset::new([]), Err(DatasetError::Empty));
    }

    #[test]
    fn rejects_oversized_input() {
        let values = vec![1.0; MAX_OBSERVATIONS + 1];
        assert_eq!(
            Dataset::new(values),
            Err(DatasetError::TooManyValues {
                max: MAX_OBSERVATIONS,
                count: MAX_OBSERVATIONS + 1,
            })
        );
    }

    #[test]
    fn accepts_exactly_max_observations() {
        let values = vec![1.0; MAX_OBSERVATIONS];
        assert!(Dataset::new(values).is_ok());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Dataset::new([1.0, f64::NAN]),
            Err(DatasetError::NonFinite { .. })
        ));
        assert!(matches!(
            Dataset::new([f64::INFINITY]),
            Err(DatasetError::NonFinite { .. })
        ));
    }

    #[test]
    fn keeps_entry_order_and_sorted_view() {
        let data = Dataset::new([3.0, 1.0, 2.0]).unwrap();
        assert_eq!(data.values(), &[3.0, 1.0, 2.0]);
        assert_eq!(data.sorted(), &[1.0, 2.0, 3.0]);
        assert_eq!(data.min(), 1.0);
        assert_eq!(data.max(), 3.0);
        assert_eq!(data.sum(), 6.0);
    }
}
