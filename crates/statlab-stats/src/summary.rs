use serde::Serialize;

use crate::{
    center::{Mode, mean, median, mode},
    dataset::Dataset,
    error::StatsError,
    percentile::percentile,
    variability::{Cv, Quartiles, VarianceKind, coefficient_of_variation, quartiles, range, std_dev, variance},
};

/// The five-number summary plus the IQR.
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, summary::FiveNumberSummary};
///
/// let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])?;
/// let summary = FiveNumberSummary::new(&data);
/// assert_eq!(summary.min, 1.0);
/// assert_eq!(summary.median, 4.0);
/// assert_eq!(summary.max, 7.0);
/// assert_eq!(summary.iqr, 4.0);
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// `q3 − q1`, carried along since box plots and fences need it.
    pub iqr: f64,
}

impl FiveNumberSummary {
    #[must_use]
    pub fn new(data: &Dataset) -> Self {
        let quartiles = quartiles(data);
        Self {
            min: data.min(),
            q1: quartiles.q1,
            median: median(data),
            q3: quartiles.q3,
            max: data.max(),
            iqr: quartiles.iqr,
        }
    }
}

/// Percentile values reported by the full summary.
///
/// All five use the same `(n+1)` rank convention as the quartiles, so
/// `p25`/`p50`/`p75` coincide with Q1/median/Q3 exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileTable {
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

impl PercentileTable {
    #[must_use]
    pub fn new(data: &Dataset) -> Self {
        Self {
            p10: percentile(data, 10.0),
            p25: percentile(data, 25.0),
            p50: percentile(data, 50.0),
            p75: percentile(data, 75.0),
            p90: percentile(data, 90.0),
        }
    }
}

/// Complete descriptive-statistics record for one dataset and one
/// population/sample choice.
///
/// Derived, never stored: inputs are at most 30 values, so the record is
/// recomputed from scratch on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub quartiles: Quartiles,
    /// `None` when the CV is unavailable: mean exactly zero, or fewer than
    /// two observations under the population variant.
    pub cv: Option<Cv>,
    /// Fisher's bias-adjusted sample skewness (G₁); `None` below n = 3 or
    /// for zero-variance data.
    pub skewness: Option<f64>,
    /// Fisher's bias-adjusted excess kurtosis (G₂); `None` below n = 4 or
    /// for zero-variance data.
    pub kurtosis: Option<f64>,
    pub percentiles: PercentileTable,
    /// Which divisor [`variance`](Self::variance) and
    /// [`std_dev`](Self::std_dev) were computed with.
    pub kind: VarianceKind,
}

impl DescriptiveSummary {
    /// Computes the full record.
    ///
    /// # Errors
    ///
    /// [`StatsError::InsufficientData`] when the sample variant is requested
    /// with fewer than two observations. A degenerate CV does not fail the
    /// record; it is reported as [`cv`](Self::cv) = `None`.
    pub fn new(data: &Dataset, kind: VarianceKind) -> Result<Self, StatsError> {
        let variance = variance(data, kind)?;
        Ok(Self {
            count: data.n(),
            mean: mean(data),
            median: median(data),
            mode: mode(data),
            min: data.min(),
            max: data.max(),
            range: range(data),
            variance,
            std_dev: std_dev(data, kind)?,
            quartiles: quartiles(data),
            cv: coefficient_of_variation(data).ok(),
            skewness: skewness(data),
            kurtosis: kurtosis(data),
            percentiles: PercentileTable::new(data),
            kind,
        })
    }

    /// The five-number summary slice of this record.
    #[must_use]
    pub fn five_number_summary(&self) -> FiveNumberSummary {
        FiveNumberSummary {
            min: self.min,
            q1: self.quartiles.q1,
            median: self.median,
            q3: self.quartiles.q3,
            max: self.max,
            iqr: self.quartiles.iqr,
        }
    }
}

/// Computes Fisher's bias-adjusted sample skewness (G₁).
///
/// `G₁ = √(n(n−1))/(n−2) · m₃/m₂^{3/2}` with m₂, m₃ the biased central
/// moments. Matches `pandas.Series.skew()` and
/// `scipy.stats.skew(bias=False)`. Returns `None` below n = 3 or when the
/// variance is zero.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn skewness(data: &Dataset) -> Option<f64> {
    let n = data.n();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let mean = mean(data);
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    for &x in data.values() {
        let d = x - mean;
        let d2 = d * d;
        sum2 += d2;
        sum3 += d2 * d;
    }
    let m2 = sum2 / nf;
    if m2 == 0.0 {
        return None;
    }
    let m3 = sum3 / nf;
    let correction = (nf * (nf - 1.0)).sqrt() / (nf - 2.0);
    Some(correction * m3 / m2.powf(1.5))
}

/// Computes Fisher's bias-adjusted excess kurtosis (G₂).
///
/// `G₂ = n(n+1)/((n−1)(n−2)(n−3)) · Σ dᵢ⁴/s⁴ − 3(n−1)²/((n−2)(n−3))` with
/// `s²` the sample variance. Matches `pandas.Series.kurtosis()`. Zero for a
/// normal distribution, positive for heavy tails, negative for light tails.
/// Returns `None` below n = 4 or when the variance is zero.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn kurtosis(data: &Dataset) -> Option<f64> {
    let n = data.n();
    if n < 4 {
        return None;
    }
    let nf = n as f64;
    let mean = mean(data);
    let mut sum2 = 0.0;
    let mut sum4 = 0.0;
    for &x in data.values() {
        let d = x - mean;
        let d2 = d * d;
        sum2 += d2;
        sum4 += d2 * d2;
    }
    if sum2 == 0.0 {
        return None;
    }
    let s2 = sum2 / (nf - 1.0);
    let term = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0)) * (sum4 / (s2 * s2));
    let adjustment = 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0));
    Some(term - adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        Dataset::new(values.iter().copied()).unwrap()
    }

    #[test]
    fn five_number_summary_ordering() {
        let data = dataset(&[40.0, 95.0, 70.0, 60.0, 75.0, 65.0, 68.0]);
        let s = FiveNumberSummary::new(&data);
        assert!(s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max);
        assert_eq!(s.iqr, s.q3 - s.q1);
    }

    #[test]
    fn percentile_table_is_consistent_with_quartiles() {
        let data = dataset(&[5.0, 12.0, 6.0, 8.0, 14.0]);
        let table = PercentileTable::new(&data);
        let q = quartiles(&data);
        assert_eq!(table.p25, q.q1);
        assert_eq!(table.p50, median(&data));
        assert_eq!(table.p75, q.q3);
        assert!(table.p10 <= table.p25 && table.p75 <= table.p90);
    }

    #[test]
    fn full_record_for_sample_data() {
        let data = dataset(&[5.0, 12.0, 6.0, 8.0, 14.0]);
        let summary = DescriptiveSummary::new(&data, VarianceKind::Sample).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.mean, 9.0);
        assert_eq!(summary.median, 8.0);
        assert_eq!(summary.range, 9.0);
        assert_eq!(summary.std_dev, summary.variance.sqrt());
        assert!(summary.cv.is_some());
        assert_eq!(summary.kind, VarianceKind::Sample);
    }

    #[test]
    fn record_fails_for_sample_variant_with_one_value() {
        let data = dataset(&[1.0]);
        assert!(matches!(
            DescriptiveSummary::new(&data, VarianceKind::Sample),
            Err(StatsError::InsufficientData { required: 2, .. })
        ));
        // population record still works, with no CV / shape stats
        let summary = DescriptiveSummary::new(&data, VarianceKind::Population).unwrap();
        assert_eq!(summary.variance, 0.0);
        assert!(summary.cv.is_none());
        assert!(summary.skewness.is_none());
        assert!(summary.kurtosis.is_none());
    }

    #[test]
    fn degenerate_cv_does_not_fail_the_record() {
        let data = dataset(&[-5.0, 0.0, 5.0]);
        let summary = DescriptiveSummary::new(&data, VarianceKind::Sample).unwrap();
        assert!(summary.cv.is_none());
        assert_eq!(summary.mean, 0.0);
    }

    #[test]
    fn skewness_of_symmetric_data_is_zero() {
        let data = dataset(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(skewness(&data).unwrap().abs() < 1e-12);
    }

    #[test]
    fn skewness_sign_follows_the_tail() {
        let right = dataset(&[1.0, 2.0, 3.0, 4.0, 50.0]);
        assert!(skewness(&right).unwrap() > 0.0);
        let left = dataset(&[-50.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(skewness(&left).unwrap() < 0.0);
    }

    #[test]
    fn skewness_matches_pandas_reference() {
        // pandas.Series([2, 4, 4, 4, 5, 5, 7, 9]).skew() = 0.8184875533567996
        let data = dataset(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((skewness(&data).unwrap() - 0.818_487_553_356_799_6).abs() < 1e-12);
    }

    #[test]
    fn kurtosis_of_uniform_data_is_platykurtic() {
        let data = dataset(&(1..=10).map(f64::from).collect::<Vec<_>>());
        assert!(kurtosis(&data).unwrap() < 0.0);
    }

    #[test]
    fn kurtosis_matches_pandas_reference() {
        // pandas.Series([1, 2, 3, 4, 100]).kurtosis() = 4.986865957200655
        let data = dataset(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert!((kurtosis(&data).unwrap() - 4.986_865_957_200_655).abs() < 1e-10);
    }

    #[test]
    fn shape_statistics_need_minimum_n() {
        assert!(skewness(&dataset(&[1.0, 2.0])).is_none());
        assert!(kurtosis(&dataset(&[1.0, 2.0, 3.0])).is_none());
        assert!(skewness(&dataset(&[3.0, 3.0, 3.0])).is_none());
    }
}
