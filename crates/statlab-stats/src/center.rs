use serde::Serialize;

use crate::{dataset::Dataset, percentile::value_at_rank};

/// Computes the arithmetic mean.
///
/// Defined for every dataset since construction guarantees n ≥ 1.
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, center::mean};
///
/// let data = Dataset::new([5.0, 12.0, 6.0, 8.0, 14.0])?;
/// assert_eq!(mean(&data), 9.0);
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(data: &Dataset) -> f64 {
    data.sum() / data.n() as f64
}

/// Computes the median via the `0.5·(n+1)` rank.
///
/// For odd n this is the middle order statistic; for even n the rank is
/// fractional and the result interpolates halfway between the two middle
/// values.
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, center::median};
///
/// let odd = Dataset::new([5.0, 12.0, 6.0, 8.0, 14.0])?;
/// assert_eq!(median(&odd), 8.0);
///
/// let even = Dataset::new([1.0, 2.0, 3.0, 4.0])?;
/// assert_eq!(median(&even), 2.5);
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn median(data: &Dataset) -> f64 {
    value_at_rank(data.sorted(), 0.5 * (data.n() as f64 + 1.0))
}

/// How many distinct values share the maximum frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize)]
pub enum Modality {
    /// Every value occurs exactly once; by convention there is no mode.
    #[display("no mode")]
    None,
    #[display("unimodal")]
    Unimodal,
    #[display("bimodal")]
    Bimodal,
    #[display("multimodal")]
    Multimodal,
}

/// The mode set of a dataset.
///
/// `values` holds every value sharing the maximum observed frequency, sorted
/// ascending. The set is empty iff no value repeats — by this crate's
/// convention that is "no mode", not "every value is a mode".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode {
    /// Values sharing the maximum frequency, ascending. Empty when no value
    /// repeats.
    pub values: Vec<f64>,
    /// The maximum observed frequency.
    pub frequency: usize,
    /// Classification by mode-set size.
    pub modality: Modality,
}

impl Mode {
    /// Human-readable rendering of the mode set, e.g. `"65, 70"` or
    /// `"no mode"`.
    #[must_use]
    pub fn display_values(&self) -> String {
        if self.values.is_empty() {
            "no mode".to_string()
        } else {
            self.values
                .iter()
                .map(|v| format!("{v}"))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Computes the mode set by exact-value frequency.
///
/// Values are compared with exact `f64` equality — no binning or tolerance.
/// This is intended for the discrete/count data typical of teaching
/// exercises; real-valued measurements with noise will rarely repeat and
/// will report "no mode".
///
/// # Examples
///
/// ```
/// use statlab_stats::{Dataset, center::{Modality, mode}};
///
/// let data = Dataset::new([10.0, 10.0, 20.0, 20.0, 20.0, 30.0])?;
/// let mode = mode(&data);
/// assert_eq!(mode.values, vec![20.0]);
/// assert_eq!(mode.frequency, 3);
/// assert_eq!(mode.modality, Modality::Unimodal);
/// # Ok::<(), statlab_stats::DatasetError>(())
/// ```
#[must_use]
pub fn mode(data: &Dataset) -> Mode {
    let max_frequency = frequencies(data)
        .map(|(_, count)| count)
        .max()
        .unwrap_or(0);

    if max_frequency <= 1 {
        return Mode {
            values: vec![],
            frequency: max_frequency,
            modality: Modality::None,
        };
    }

    let values = frequencies(data)
        .filter(|&(_, count)| count == max_frequency)
        .map(|(value, _)| value)
        .collect::<Vec<_>>();
    let modality = match values.len() {
        1 => Modality::Unimodal,
        2 => Modality::Bimodal,
        _ => Modality::Multimodal,
    };

    Mode {
        values,
        frequency: max_frequency,
        modality,
    }
}

/// Iterates `(value, frequency)` pairs in ascending value order.
///
/// Groups runs of equal values in the sorted view, which sidesteps hashing
/// floats and yields the frequency table already sorted for display.
pub fn frequencies(data: &Dataset) -> impl Iterator<Item = (f64, usize)> {
    data.sorted()
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        Dataset::new(values.iter().copied()).unwrap()
    }

    // Walking shoe prices, n = 18
    const SHOE_PRICES: &[f64] = &[
        40.0, 60.0, 65.0, 65.0, 65.0, 68.0, 68.0, 70.0, 70.0, 70.0, 70.0, 70.0, 70.0, 74.0, 75.0,
        75.0, 90.0, 95.0,
    ];

    #[test]
    fn shoe_prices_median_and_mode() {
        let data = dataset(SHOE_PRICES);
        assert_eq!(median(&data), 70.0);

        let mode = mode(&data);
        assert_eq!(mode.values, vec![70.0]);
        assert_eq!(mode.frequency, 6);
        assert_eq!(mode.modality, Modality::Unimodal);
    }

    #[test]
    fn flower_petals_mean_and_median() {
        let data = dataset(&[5.0, 12.0, 6.0, 8.0, 14.0]);
        assert_eq!(mean(&data), 9.0);
        assert_eq!(median(&data), 8.0);
    }

    #[test]
    fn even_n_median_interpolates() {
        let data = dataset(&[1.0, 2.0, 3.0, 10.0]);
        assert_eq!(median(&data), 2.5);
    }

    #[test]
    fn single_value_dataset() {
        let data = dataset(&[7.0]);
        assert_eq!(mean(&data), 7.0);
        assert_eq!(median(&data), 7.0);
        assert_eq!(mode(&data).modality, Modality::None);
    }

    #[test]
    fn no_repeats_means_no_mode() {
        let data = dataset(&[1.0, 2.0, 3.0, 4.0]);
        let mode = mode(&data);
        assert!(mode.values.is_empty());
        assert_eq!(mode.modality, Modality::None);
        assert_eq!(mode.display_values(), "no mode");
    }

    #[test]
    fn bimodal_and_multimodal_classification() {
        let bimodal = mode(&dataset(&[1.0, 1.0, 2.0, 2.0, 3.0]));
        assert_eq!(bimodal.values, vec![1.0, 2.0]);
        assert_eq!(bimodal.modality, Modality::Bimodal);

        let multi = mode(&dataset(&[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]));
        assert_eq!(multi.values.len(), 3);
        assert_eq!(multi.modality, Modality::Multimodal);
    }

    #[test]
    fn mode_values_are_sorted() {
        let mode = mode(&dataset(&[9.0, 9.0, 1.0, 1.0, 5.0]));
        assert_eq!(mode.values, vec![1.0, 9.0]);
        assert_eq!(mode.display_values(), "1, 9");
    }

    #[test]
    fn frequencies_cover_all_values() {
        let data = dataset(&[2.0, 1.0, 2.0, 3.0]);
        let table = frequencies(&data).collect::<Vec<_>>();
        assert_eq!(table, vec![(1.0, 1), (2.0, 2), (3.0, 1)]);
    }

    #[test]
    fn calculators_are_pure() {
        let data = dataset(SHOE_PRICES);
        assert_eq!(mean(&data), mean(&data));
        assert_eq!(median(&data), median(&data));
        assert_eq!(mode(&data), mode(&data));
    }
}
