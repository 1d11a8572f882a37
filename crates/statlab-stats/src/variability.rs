use serde::Serialize;

use crate::{
    center::mean,
    dataset::Dataset,
    error::StatsError,
    percentile::value_at_rank,
};

/// Which divisor the variance uses.
///
/// Selection is always an explicit caller decision; nothing in this crate
/// infers it from the data.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize)]
pub enum VarianceKind {
    /// Divide the squared deviations by n. Valid for any dataset.
    #[display("population")]
    Population,
    /// Divide by n − 1 (Bessel's correction). Requires n ≥ 2.
    #[default]
    #[display("sample")]
    Sample,
}

impl VarianceKind {
    /// Minimum number of observations this variant is defined for.
    #[must_use]
    pub fn min_observations(self) -> usize {
        match self {
            VarianceKind::Population => 1,
            VarianceKind::Sample => 2,
        }
    }

    /// The divisor for a dataset of n observations.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn divisor(self, n: usize) -> f64 {
        match self {
            VarianceKind::Population => n as f64,
            VarianceKind::Sample => (n - 1) as f64,
        }
    }

    /// Conventional notation for this variant's variance (σ² or s²).
    #[must_use]
    pub fn variance_symbol(self) -> &'static str {
        match self {
            VarianceKind::Population => "σ²",
            VarianceKind::Sample => "s²",
        }
    }

    /// Conventional notation for this variant's standard deviation (σ or s).
    #[must_use]
    pub fn std_dev_symbol(self) -> &'static str {
        match self {
            VarianceKind::Population => "σ",
            VarianceKind::Sample => "s",
        }
    }

    fn check(self, n: usize) -> Result<(), StatsError> {
        let required = self.min_observations();
        if n < required {
            return Err(StatsError::InsufficientData { required, actual: n });
        }
        Ok(())
    }
}

/// Computes the range, `max − min`.
///
/// Always ≥ 0 by construction.
#[must_use]
pub fn range(data: &Dataset) -> f64 {
    data.max() - data.min()
}

/// Computes the variance via the definitional (mean-deviation) formula.
///
/// Sums squared deviations from the mean, then divides by the
/// [`VarianceKind`] divisor.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] for the sample variant with n < 2.
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, VarianceKind, variability::variance};
///
/// let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0])?;
/// assert_eq!(variance(&data, VarianceKind::Population)?, 2.0);
/// assert_eq!(variance(&data, VarianceKind::Sample)?, 2.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn variance(data: &Dataset, kind: VarianceKind) -> Result<f64, StatsError> {
    kind.check(data.n())?;
    let mean = mean(data);
    let sum_squared_deviations = data
        .values()
        .iter()
        .map(|x| (x - mean).powi(2))
        .sum::<f64>();
    Ok(sum_squared_deviations / kind.divisor(data.n()))
}

/// Computes the variance via the computational shortcut formula
/// `(Σx² − (Σx)²/n) / divisor`.
///
/// Algebraically identical to [`variance`]; exposed separately so the two
/// can be cross-checked. Agreement within floating-point tolerance is a
/// tested property of this crate.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] for the sample variant with n < 2.
pub fn variance_shortcut(data: &Dataset, kind: VarianceKind) -> Result<f64, StatsError> {
    kind.check(data.n())?;
    let sum = data.sum();
    let sum_of_squares = data.values().iter().map(|x| x * x).sum::<f64>();
    #[expect(clippy::cast_precision_loss)]
    let n = data.n() as f64;
    Ok((sum_of_squares - sum * sum / n) / kind.divisor(data.n()))
}

/// Computes the standard deviation, `√variance`.
///
/// # Errors
///
/// [`StatsError::InsufficientData`] for the sample variant with n < 2.
pub fn std_dev(data: &Dataset, kind: VarianceKind) -> Result<f64, StatsError> {
    Ok(variance(data, kind)?.sqrt())
}

/// First and third quartiles with the interquartile range and outlier
/// fences derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// First quartile, at rank `0.25·(n+1)`.
    pub q1: f64,
    /// Third quartile, at rank `0.75·(n+1)`.
    pub q3: f64,
    /// Interquartile range, `q3 − q1`.
    pub iqr: f64,
}

impl Quartiles {
    /// Lower outlier fence, `Q1 − 1.5·IQR`.
    #[must_use]
    pub fn lower_fence(&self) -> f64 {
        self.q1 - 1.5 * self.iqr
    }

    /// Upper outlier fence, `Q3 + 1.5·IQR`.
    #[must_use]
    pub fn upper_fence(&self) -> f64 {
        self.q3 + 1.5 * self.iqr
    }

    /// Whether a value falls outside the fences.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence() || value > self.upper_fence()
    }
}

/// Computes Q1, Q3 and the IQR with the same rank-interpolation rule as the
/// median.
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, variability::quartiles};
///
/// // n = 7: Q1 rank = 2, Q3 rank = 6
/// let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])?;
/// let q = quartiles(&data);
/// assert_eq!((q.q1, q.q3, q.iqr), (2.0, 6.0, 4.0));
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn quartiles(data: &Dataset) -> Quartiles {
    let n = data.n() as f64;
    let q1 = value_at_rank(data.sorted(), 0.25 * (n + 1.0));
    let q3 = value_at_rank(data.sorted(), 0.75 * (n + 1.0));
    Quartiles {
        q1,
        q3,
        iqr: q3 - q1,
    }
}

/// Values falling outside the 1.5·IQR fences, ascending.
///
/// Flagged for visualization and interpretation only; nothing is removed
/// from the dataset.
#[must_use]
pub fn outliers(data: &Dataset) -> Vec<f64> {
    let quartiles = quartiles(data);
    data.sorted()
        .iter()
        .copied()
        .filter(|&v| quartiles.is_outlier(v))
        .collect()
}

/// Relative spread below which the mean counts as "near zero" for the CV.
const NEAR_ZERO_MEAN_RATIO: f64 = 1e-12;

/// Coefficient of variation as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cv {
    /// `(s / x̄) · 100`, using the sample standard deviation.
    pub percent: f64,
    /// Set when the mean is so close to zero (relative to the spread) that
    /// the ratio is numerically meaningless. The value is still reported;
    /// callers should surface this as a warning.
    pub near_zero_mean: bool,
}

/// Computes the coefficient of variation, `(s / x̄) · 100`.
///
/// Uses the sample standard deviation, so n ≥ 2 is required. A mean of
/// exactly zero makes the ratio undefined and is a hard error; a mean that
/// is merely tiny relative to the spread yields a value flagged with
/// [`Cv::near_zero_mean`].
///
/// # Errors
///
/// * [`StatsError::InsufficientData`] with n < 2
/// * [`StatsError::DegenerateMean`] when the mean is exactly zero
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, StatsError, variability::coefficient_of_variation};
///
/// let data = Dataset::new([-5.0, 0.0, 5.0])?;
/// assert_eq!(
///     coefficient_of_variation(&data),
///     Err(StatsError::DegenerateMean)
/// );
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
pub fn coefficient_of_variation(data: &Dataset) -> Result<Cv, StatsError> {
    let std_dev = std_dev(data, VarianceKind::Sample)?;
    let mean = mean(data);
    if mean == 0.0 {
        return Err(StatsError::DegenerateMean);
    }
    Ok(Cv {
        percent: std_dev / mean * 100.0,
        near_zero_mean: mean.abs() < NEAR_ZERO_MEAN_RATIO * std_dev,
    })
}
