use crate::dataset::Dataset;

/// Computes the value at a 1-based rank over sorted data.
///
/// Integer ranks return the order statistic directly; fractional ranks
/// interpolate linearly between the two bracketing order statistics using
/// the fractional part as weight. Ranks are clamped to `[1, n]`.
#[expect(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[must_use]
pub(crate) fn value_at_rank(sorted: &[f64], rank: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "rank lookup on empty data");
    let rank = rank.clamp(1.0, sorted.len() as f64);
    let lower = rank.floor() as usize;
    let frac = rank - rank.floor();
    if frac == 0.0 {
        sorted[lower - 1]
    } else {
        let lo = sorted[lower - 1];
        let hi = sorted[lower];
        lo + frac * (hi - lo)
    }
}

/// Computes the p-th percentile (0–100) of a dataset.
///
/// Uses the weighted-average rank `(p/100)·(n+1)` with linear interpolation,
/// the same convention as [`center::median`](crate::center::median) and
/// [`variability::quartiles`](crate::variability::quartiles), so every ranked
/// statistic in this crate agrees with the others. Note that this deviates
/// from nearest-rank and from the linear-on-`(n-1)` convention used by many
/// numeric libraries; for small n the differences are visible.
///
/// Ranks outside `[1, n]` (extreme percentiles on small datasets) clamp to
/// the minimum or maximum observation.
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, percentile::percentile};
///
/// let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0])?;
/// assert_eq!(percentile(&data, 50.0), 3.0);
/// // rank = 0.25 * 6 = 1.5 -> halfway between 1 and 2
/// assert_eq!(percentile(&data, 25.0), 1.5);
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[must_use]
pub fn percentile(data: &Dataset, p: f64) -> f64 {
    debug_assert!((0.0..=100.0).contains(&p), "percentile out of range: {p}");
    #[expect(clippy::cast_precision_loss)]
    let rank = (p / 100.0) * (data.n() as f64 + 1.0);
    value_at_rank(data.sorted(), rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_rank_returns_order_statistic() {
        let sorted = [10.0, 20.0, 30.0];
        assert_eq!(value_at_rank(&sorted, 2.0), 20.0);
    }

    #[test]
    fn fractional_rank_interpolates() {
        let sorted = [10.0, 20.0, 30.0];
        assert_eq!(value_at_rank(&sorted, 1.5), 15.0);
        assert_eq!(value_at_rank(&sorted, 2.25), 22.5);
    }

    #[test]
    fn rank_clamps_to_data_bounds() {
        let sorted = [10.0, 20.0, 30.0];
        assert_eq!(value_at_rank(&sorted, 0.2), 10.0);
        assert_eq!(value_at_rank(&sorted, 7.5), 30.0);
    }

    #[test]
    fn percentile_matches_quartile_convention() {
        // n = 11: P25 rank = 3, P75 rank = 9, exact order statistics
        let data = Dataset::new((1..=11).map(f64::from)).unwrap();
        assert_eq!(percentile(&data, 25.0), 3.0);
        assert_eq!(percentile(&data, 50.0), 6.0);
        assert_eq!(percentile(&data, 75.0), 9.0);
    }

    #[test]
    fn extreme_percentiles_clamp() {
        let data = Dataset::new([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(percentile(&data, 0.0), 1.0);
        assert_eq!(percentile(&data, 100.0), 3.0);
        // P90 rank = 3.6 clamps to n = 3
        assert_eq!(percentile(&data, 90.0), 3.0);
    }
}
