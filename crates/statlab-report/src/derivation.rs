//! Step-by-step worked derivations for each statistic.
//!
//! Each builder recomputes the statistic it explains, showing the same
//! intermediate quantities a textbook solution would: ranks, interpolation
//! weights, deviation tables, both variance formulas. The output is plain
//! text; the TUI and the `summary` command render it verbatim.

use std::fmt;

use statlab_stats::{
    Dataset, StatsError, VarianceKind, center, percentile, variability,
};

use crate::fmt_value;

/// One numbered step of a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub work: String,
}

/// A complete worked derivation for one statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub title: String,
    /// One-sentence definition of the measure.
    pub intro: String,
    pub steps: Vec<Step>,
    /// Final value, already formatted.
    pub result: String,
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.intro)?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Step {}: {}", i + 1, step.label)?;
            for line in step.work.lines() {
                writeln!(f, "  {line}")?;
            }
        }
        writeln!(f)?;
        write!(f, "Result: {}", self.result)
    }
}

fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| fmt_value(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describes how a `(n+1)`-rank position resolves to a value, interpolating
/// when the rank is fractional. Shared by the median, quartile, and
/// percentile derivations.
///
/// Clamps the rank to `[1, n]` with the same rule as the calculators, so
/// tiny datasets (quartile ranks below 1 at n ≤ 2) resolve to the extreme
/// order statistics instead of indexing out of bounds. A clamp is called out
/// in the text.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn rank_work(sorted: &[f64], rank: f64) -> String {
    let n = sorted.len();
    let clamped = rank.clamp(1.0, n as f64);
    let prefix = if (clamped - rank).abs() > f64::EPSILON {
        format!("rank {rank} is outside [1, {n}], clamped to {clamped}; ")
    } else {
        String::new()
    };

    let int = clamped.floor() as usize;
    let frac = clamped - clamped.floor();
    if frac == 0.0 {
        format!(
            "{prefix}the rank is a whole number, so take the {int}th sorted value: {}",
            fmt_value(sorted[int - 1])
        )
    } else {
        let lo = sorted[int - 1];
        let hi = sorted[int];
        let value = lo + frac * (hi - lo);
        format!(
            "{prefix}the rank falls between positions {int} and {}: {} + {frac:.2} × ({} − {}) = {}",
            int + 1,
            fmt_value(lo),
            fmt_value(hi),
            fmt_value(lo),
            fmt_value(value)
        )
    }
}

/// Worked derivation of the mean.
#[must_use]
pub fn mean(data: &Dataset) -> Derivation {
    let n = data.n();
    let sum = data.sum();
    let mean = center::mean(data);
    let terms = data
        .values()
        .iter()
        .map(|v| fmt_value(*v))
        .collect::<Vec<_>>()
        .join(" + ");

    Derivation {
        title: "Mean".to_string(),
        intro: "The mean is the sum of the measurements divided by how many there are: \
                x̄ = Σxᵢ / n."
            .to_string(),
        steps: vec![
            Step {
                label: "sum all measurements".to_string(),
                work: format!("Σxᵢ = {terms} = {}", fmt_value(sum)),
            },
            Step {
                label: format!("divide by the number of measurements (n = {n})"),
                work: format!("x̄ = {} / {n} = {}", fmt_value(sum), fmt_value(mean)),
            },
        ],
        result: format!("mean = {}", fmt_value(mean)),
    }
}

/// Worked derivation of the median.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn median(data: &Dataset) -> Derivation {
    let n = data.n();
    let rank = 0.5 * (n as f64 + 1.0);
    let median = center::median(data);

    Derivation {
        title: "Median".to_string(),
        intro: "The median is the middle value once the measurements are ranked from \
                smallest to largest."
            .to_string(),
        steps: vec![
            Step {
                label: "sort the data".to_string(),
                work: join_values(data.sorted()),
            },
            Step {
                label: "find the median's rank".to_string(),
                work: format!("rank = 0.5 × (n + 1) = 0.5 × ({n} + 1) = {rank}"),
            },
            Step {
                label: "read off (or interpolate) the value".to_string(),
                work: rank_work(data.sorted(), rank),
            },
        ],
        result: format!("median = {}", fmt_value(median)),
    }
}

/// Worked derivation of the mode, including the frequency table.
#[must_use]
pub fn mode(data: &Dataset) -> Derivation {
    let mode = center::mode(data);
    let table = center::frequencies(data)
        .map(|(value, count)| format!("{:>10} | {count}", fmt_value(value)))
        .collect::<Vec<_>>()
        .join("\n");

    let result = if mode.values.is_empty() {
        "no mode (every value appears exactly once)".to_string()
    } else {
        format!(
            "{} — {} (each appears {} times)",
            mode.display_values(),
            mode.modality,
            mode.frequency
        )
    };

    Derivation {
        title: "Mode".to_string(),
        intro: "The mode is the value (or values) appearing most frequently in the dataset."
            .to_string(),
        steps: vec![
            Step {
                label: "count the frequency of each value".to_string(),
                work: format!("{:>10} | frequency\n{table}", "value"),
            },
            Step {
                label: "identify the highest frequency".to_string(),
                work: format!("maximum frequency = {}", mode.frequency.max(1)),
            },
            Step {
                label: "classify the mode set".to_string(),
                work: mode.modality.to_string(),
            },
        ],
        result,
    }
}

/// Worked derivation of the range.
#[must_use]
pub fn range(data: &Dataset) -> Derivation {
    let (min, max) = (data.min(), data.max());
    Derivation {
        title: "Range".to_string(),
        intro: "The range is the difference between the largest and smallest values: \
                R = max − min."
            .to_string(),
        steps: vec![
            Step {
                label: "find the extremes".to_string(),
                work: format!("min = {}, max = {}", fmt_value(min), fmt_value(max)),
            },
            Step {
                label: "subtract".to_string(),
                work: format!(
                    "R = {} − {} = {}",
                    fmt_value(max),
                    fmt_value(min),
                    fmt_value(max - min)
                ),
            },
        ],
        result: format!("range = {}", fmt_value(max - min)),
    }
}

/// Worked derivation of the variance, showing both the definitional and the
/// computational (shortcut) formula.
///
/// # Errors
///
/// Propagates [`StatsError::InsufficientData`] for the sample variant with
/// n < 2.
pub fn variance(data: &Dataset, kind: VarianceKind) -> Result<Derivation, StatsError> {
    let n = data.n();
    let mean = center::mean(data);
    let variance = variability::variance(data, kind)?;
    let shortcut = variability::variance_shortcut(data, kind)?;
    let divisor = kind.divisor(n);
    let symbol = kind.variance_symbol();

    let deviation_table = data
        .values()
        .iter()
        .map(|&x| {
            let d = x - mean;
            format!(
                "{:>10} | {:>10} | {:>12}",
                fmt_value(x),
                fmt_value(d),
                fmt_value(d * d)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let sum_squared_deviations = data
        .values()
        .iter()
        .map(|&x| (x - mean).powi(2))
        .sum::<f64>();
    let sum = data.sum();
    let sum_of_squares = data.values().iter().map(|&x| x * x).sum::<f64>();

    Ok(Derivation {
        title: format!("{} variance", capitalize(kind)),
        intro: format!(
            "The variance is the average squared deviation from the mean, with divisor \
             {} for the {kind} variant: {symbol} = Σ(xᵢ − x̄)² / {}.",
            fmt_value(divisor),
            divisor_name(kind),
        ),
        steps: vec![
            Step {
                label: "compute the mean".to_string(),
                work: format!("x̄ = {} / {n} = {}", fmt_value(sum), fmt_value(mean)),
            },
            Step {
                label: "square each deviation from the mean".to_string(),
                work: format!(
                    "{:>10} | {:>10} | {:>12}\n{deviation_table}",
                    "xᵢ", "xᵢ − x̄", "(xᵢ − x̄)²"
                ),
            },
            Step {
                label: "sum the squared deviations".to_string(),
                work: format!("Σ(xᵢ − x̄)² = {}", fmt_value(sum_squared_deviations)),
            },
            Step {
                label: format!("divide by {}", divisor_name(kind)),
                work: format!(
                    "{symbol} = {} / {} = {}",
                    fmt_value(sum_squared_deviations),
                    fmt_value(divisor),
                    fmt_value(variance)
                ),
            },
            Step {
                label: "cross-check with the computational formula".to_string(),
                work: format!(
                    "{symbol} = (Σxᵢ² − (Σxᵢ)²/n) / {}\n   = ({} − {}²/{n}) / {} = {}",
                    fmt_value(divisor),
                    fmt_value(sum_of_squares),
                    fmt_value(sum),
                    fmt_value(divisor),
                    fmt_value(shortcut)
                ),
            },
        ],
        result: format!("{symbol} = {}", fmt_value(variance)),
    })
}

/// Worked derivation of the standard deviation.
///
/// # Errors
///
/// Propagates [`StatsError::InsufficientData`] for the sample variant with
/// n < 2.
pub fn std_dev(data: &Dataset, kind: VarianceKind) -> Result<Derivation, StatsError> {
    let variance = variability::variance(data, kind)?;
    let std_dev = variability::std_dev(data, kind)?;
    let symbol = kind.std_dev_symbol();

    Ok(Derivation {
        title: format!("{} standard deviation", capitalize(kind)),
        intro: format!(
            "The standard deviation is the square root of the variance, returning the \
             spread to the original units: {symbol} = √{}.",
            kind.variance_symbol()
        ),
        steps: vec![
            Step {
                label: "compute the variance".to_string(),
                work: format!("{} = {}", kind.variance_symbol(), fmt_value(variance)),
            },
            Step {
                label: "take the square root".to_string(),
                work: format!(
                    "{symbol} = √{} = {}",
                    fmt_value(variance),
                    fmt_value(std_dev)
                ),
            },
        ],
        result: format!("{symbol} = {}", fmt_value(std_dev)),
    })
}

/// Worked derivation of the quartiles and IQR, including outlier fences.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn iqr(data: &Dataset) -> Derivation {
    let n = data.n();
    let q = variability::quartiles(data);
    let q1_rank = 0.25 * (n as f64 + 1.0);
    let q3_rank = 0.75 * (n as f64 + 1.0);
    let flagged = variability::outliers(data);
    let outlier_work = if flagged.is_empty() {
        "no observation falls outside the fences".to_string()
    } else {
        format!("potential outliers: {}", join_values(&flagged))
    };

    Derivation {
        title: "Interquartile range".to_string(),
        intro: "The IQR is the spread of the middle 50% of the data: IQR = Q₃ − Q₁."
            .to_string(),
        steps: vec![
            Step {
                label: "sort the data".to_string(),
                work: join_values(data.sorted()),
            },
            Step {
                label: "locate Q₁".to_string(),
                work: format!(
                    "rank = 0.25 × (n + 1) = {q1_rank}; {}",
                    rank_work(data.sorted(), q1_rank)
                ),
            },
            Step {
                label: "locate Q₃".to_string(),
                work: format!(
                    "rank = 0.75 × (n + 1) = {q3_rank}; {}",
                    rank_work(data.sorted(), q3_rank)
                ),
            },
            Step {
                label: "subtract".to_string(),
                work: format!(
                    "IQR = {} − {} = {}",
                    fmt_value(q.q3),
                    fmt_value(q.q1),
                    fmt_value(q.iqr)
                ),
            },
            Step {
                label: "set the outlier fences at 1.5 × IQR".to_string(),
                work: format!(
                    "lower = Q₁ − 1.5·IQR = {}\nupper = Q₃ + 1.5·IQR = {}\n{outlier_work}",
                    fmt_value(q.lower_fence()),
                    fmt_value(q.upper_fence()),
                ),
            },
        ],
        result: format!("IQR = {}", fmt_value(q.iqr)),
    }
}

/// Worked derivation of the coefficient of variation.
///
/// # Errors
///
/// Propagates [`StatsError::InsufficientData`] (n < 2) and
/// [`StatsError::DegenerateMean`] (zero mean).
pub fn coefficient_of_variation(data: &Dataset) -> Result<Derivation, StatsError> {
    let cv = variability::coefficient_of_variation(data)?;
    let mean = center::mean(data);
    let std_dev = variability::std_dev(data, VarianceKind::Sample)?;

    let mut steps = vec![
        Step {
            label: "compute the mean".to_string(),
            work: format!("x̄ = {}", fmt_value(mean)),
        },
        Step {
            label: "compute the sample standard deviation".to_string(),
            work: format!("s = {}", fmt_value(std_dev)),
        },
        Step {
            label: "divide and express as a percentage".to_string(),
            work: format!(
                "CV = {} / {} × 100% = {:.2}%",
                fmt_value(std_dev),
                fmt_value(mean),
                cv.percent
            ),
        },
    ];
    if cv.near_zero_mean {
        steps.push(Step {
            label: "warning".to_string(),
            work: "the mean is nearly zero, so this CV is numerically meaningless".to_string(),
        });
    }

    Ok(Derivation {
        title: "Coefficient of variation".to_string(),
        intro: "The CV expresses the spread relative to the mean, as a unitless \
                percentage: CV = s / x̄ × 100%."
            .to_string(),
        steps,
        result: format!("CV = {:.2}%", cv.percent),
    })
}

/// Worked derivation of the p-th percentile.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn percentile(data: &Dataset, p: f64) -> Derivation {
    let n = data.n();
    let rank = (p / 100.0) * (n as f64 + 1.0);
    let clamped = rank.clamp(1.0, n as f64);
    let value = percentile::percentile(data, p);
    let mut steps = vec![
        Step {
            label: "sort the data".to_string(),
            work: join_values(data.sorted()),
        },
        Step {
            label: "find the percentile's rank".to_string(),
            work: format!("rank = {p}/100 × (n + 1) = {rank}"),
        },
    ];
    if (clamped - rank).abs() > f64::EPSILON {
        steps.push(Step {
            label: "clamp the rank to the data".to_string(),
            work: format!("rank {rank} is outside [1, {n}], clamped to {clamped}"),
        });
    }
    steps.push(Step {
        label: "read off (or interpolate) the value".to_string(),
        work: rank_work(data.sorted(), clamped),
    });

    Derivation {
        title: format!("{p}th percentile"),
        intro: "Percentiles use the same weighted-average rank rule as the median and \
                quartiles: rank = p/100 × (n + 1)."
            .to_string(),
        steps,
        result: format!("P{p} = {}", fmt_value(value)),
    }
}

fn capitalize(kind: VarianceKind) -> &'static str {
    match kind {
        VarianceKind::Population => "Population",
        VarianceKind::Sample => "Sample",
    }
}

fn divisor_name(kind: VarianceKind) -> &'static str {
    match kind {
        VarianceKind::Population => "n",
        VarianceKind::Sample => "n − 1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        Dataset::new(values.iter().copied()).unwrap()
    }

    #[test]
    fn mean_derivation_shows_sum_and_division() {
        let d = mean(&dataset(&[5.0, 12.0, 6.0, 8.0, 14.0]));
        let text = d.to_string();
        assert!(text.contains("5 + 12 + 6 + 8 + 14 = 45"));
        assert!(text.contains("45 / 5 = 9"));
        assert!(text.contains("Result: mean = 9"));
    }

    #[test]
    fn median_derivation_shows_interpolation_for_even_n() {
        let d = median(&dataset(&[1.0, 2.0, 3.0, 4.0]));
        let text = d.to_string();
        assert!(text.contains("0.5 × (4 + 1) = 2.5"));
        assert!(text.contains("between positions 2 and 3"));
        assert!(text.contains("Result: median = 2.5"));
    }

    #[test]
    fn median_derivation_whole_rank() {
        let d = median(&dataset(&[3.0, 1.0, 2.0]));
        assert!(d.to_string().contains("take the 2th sorted value"));
    }

    #[test]
    fn mode_derivation_includes_frequency_table() {
        let d = mode(&dataset(&[10.0, 10.0, 20.0, 20.0, 20.0, 30.0]));
        let text = d.to_string();
        assert!(text.contains("frequency"));
        assert!(text.contains("maximum frequency = 3"));
        assert!(text.contains("unimodal"));
        assert!(text.contains("20"));
    }

    #[test]
    fn variance_derivation_shows_both_formulas() {
        let d = variance(&dataset(&[1.0, 2.0, 3.0, 4.0, 5.0]), VarianceKind::Sample).unwrap();
        let text = d.to_string();
        assert!(text.contains("Σ(xᵢ − x̄)² = 10"));
        assert!(text.contains("s² = 10 / 4 = 2.5"));
        assert!(text.contains("computational formula"));
    }

    #[test]
    fn population_variance_uses_sigma_notation() {
        let d = variance(&dataset(&[1.0, 2.0, 3.0]), VarianceKind::Population).unwrap();
        assert!(d.to_string().contains("σ²"));
        assert!(d.title.starts_with("Population"));
    }

    #[test]
    fn variance_derivation_propagates_insufficient_data() {
        assert!(variance(&dataset(&[1.0]), VarianceKind::Sample).is_err());
    }

    #[test]
    fn iqr_derivation_reports_fences_and_outliers() {
        let d = iqr(&dataset(&[
            260.0, 290.0, 300.0, 320.0, 330.0, 340.0, 340.0, 520.0,
        ]));
        let text = d.to_string();
        assert!(text.contains("potential outliers: 520"));
        assert!(text.contains("0.25 × (n + 1)"));
    }

    #[test]
    fn iqr_derivation_clamps_ranks_for_a_single_value() {
        // n = 1: Q1 rank 0.5 and Q3 rank 1.5 both clamp to the only value.
        let d = iqr(&dataset(&[5.0]));
        let text = d.to_string();
        assert!(text.contains("clamped"));
        assert!(text.contains("Result: IQR = 0"));
    }

    #[test]
    fn iqr_derivation_clamps_ranks_for_two_values() {
        // n = 2: Q1 rank 0.75 clamps to 1, Q3 rank 2.25 clamps to 2.
        let d = iqr(&dataset(&[1.0, 2.0]));
        let text = d.to_string();
        assert!(text.contains("clamped to 1"));
        assert!(text.contains("clamped to 2"));
        assert!(text.contains("Result: IQR = 1"));
    }

    #[test]
    fn cv_derivation_rejects_zero_mean() {
        assert_eq!(
            coefficient_of_variation(&dataset(&[-5.0, 0.0, 5.0])),
            Err(StatsError::DegenerateMean)
        );
    }

    #[test]
    fn percentile_derivation_notes_clamping() {
        let d = percentile(&dataset(&[1.0, 2.0, 3.0]), 90.0);
        assert!(d.to_string().contains("clamped"));
    }
}
