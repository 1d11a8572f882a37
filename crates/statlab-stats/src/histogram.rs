use std::ops::Range;

use crate::dataset::Dataset;

/// A frequency histogram over the full data range.
///
/// Bins are equal width and cover `[min, max]`; the last bin is closed on
/// the right so the maximum lands inside it. With at most 30 observations
/// there are no tails worth clipping, so no underflow/overflow handling
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
}

/// A single histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Value range covered by this bin (inclusive start; exclusive end
    /// except for the last bin).
    pub range: Range<f64>,
    /// Number of observations falling in the range.
    pub count: u64,
}

impl Histogram {
    /// Bin count rule used when the caller has no preference.
    ///
    /// `min(⌈√n⌉, 10)` below 20 observations, Sturges' `⌈log₂ n⌉ + 1`
    /// otherwise.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn auto_bin_count(n: usize) -> usize {
        let count = if n < 20 {
            ((n as f64).sqrt().ceil() as usize).min(10)
        } else {
            (n as f64).log2().ceil() as usize + 1
        };
        count.max(1)
    }

    /// Builds a histogram with `num_bins` equal-width bins.
    ///
    /// A zero-width range (all observations equal) degenerates to a single
    /// unit-width bin centered on the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::{Dataset, histogram::Histogram};
    ///
    /// let data = Dataset::new([1.0, 2.0, 2.0, 3.0, 9.0])?;
    /// let histogram = Histogram::new(&data, 4);
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.total_count(), 5);
    /// # Ok::<(), statlab_stats::DatasetError>(())
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new(data: &Dataset, num_bins: usize) -> Self {
        let num_bins = num_bins.max(1);
        let (min, max) = (data.min(), data.max());

        // Degenerate range: one bin around the single distinct value.
        if max - min < f64::EPSILON * min.abs().max(1.0) {
            return Self {
                bins: vec![Bin {
                    range: (min - 0.5)..(min + 0.5),
                    count: data.n() as u64,
                }],
            };
        }

        let width = (max - min) / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|i| Bin {
                range: (min + i as f64 * width)..(min + (i + 1) as f64 * width),
                count: 0,
            })
            .collect::<Vec<_>>();

        for &value in data.sorted() {
            let idx = (((value - min) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Histogram with the [`auto_bin_count`](Self::auto_bin_count) rule.
    #[must_use]
    pub fn auto(data: &Dataset) -> Self {
        Self::new(data, Self::auto_bin_count(data.n()))
    }

    /// Total number of observations across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Largest bin count (the tallest bar).
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        Dataset::new(values.iter().copied()).unwrap()
    }

    #[test]
    fn auto_bin_count_uses_sqrt_rule_for_small_n() {
        assert_eq!(Histogram::auto_bin_count(4), 2);
        assert_eq!(Histogram::auto_bin_count(10), 4);
        assert_eq!(Histogram::auto_bin_count(18), 5);
    }

    #[test]
    fn auto_bin_count_uses_sturges_for_larger_n() {
        // ceil(log2(20)) + 1 = 6, ceil(log2(30)) + 1 = 6
        assert_eq!(Histogram::auto_bin_count(20), 6);
        assert_eq!(Histogram::auto_bin_count(30), 6);
    }

    #[test]
    fn every_observation_lands_in_a_bin() {
        let data = dataset(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let histogram = Histogram::new(&data, 5);
        assert_eq!(histogram.total_count(), 10);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let data = dataset(&[0.0, 10.0]);
        let histogram = Histogram::new(&data, 2);
        assert_eq!(histogram.bins[1].count, 1);
        assert_eq!(histogram.bins[0].count, 1);
    }

    #[test]
    fn constant_data_degenerates_to_one_bin() {
        let data = dataset(&[4.0, 4.0, 4.0]);
        let histogram = Histogram::new(&data, 5);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].count, 3);
        assert!(histogram.bins[0].range.contains(&4.0));
    }

    #[test]
    fn counts_match_expected_distribution() {
        let data = dataset(&[1.0, 1.5, 2.0, 2.5, 9.0]);
        let histogram = Histogram::new(&data, 4);
        // width 2: [1,3) holds 4, [3,5) 0, [5,7) 0, [7,9] 1
        assert_eq!(
            histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            vec![4, 0, 0, 1]
        );
        assert_eq!(histogram.max_count(), 4);
    }
}
