//! Plain-language interpretation of a computed summary.
//!
//! Every function returns ready-to-print sentences derived from the numbers
//! alone, so the same text serves the TUI panes and the `summary` command.

use statlab_stats::{
    Dataset, VarianceKind, center,
    summary::DescriptiveSummary,
    variability,
};

use crate::fmt_value;

/// Relative gap below which mean and median are called "close".
const SYMMETRY_RATIO: f64 = 0.05;

/// Compares mean and median to describe the shape of the distribution.
#[must_use]
pub fn center_comparison(summary: &DescriptiveSummary) -> String {
    let (mean, median) = (summary.mean, summary.median);
    let scale = mean.abs().max(median.abs());
    if scale == 0.0 || (mean - median).abs() < SYMMETRY_RATIO * scale {
        format!(
            "The mean ({}) and median ({}) are close, suggesting a roughly \
             symmetric distribution.",
            fmt_value(mean),
            fmt_value(median)
        )
    } else if mean > median {
        format!(
            "The mean ({}) exceeds the median ({}), suggesting a right-skewed \
             distribution pulled up by large values.",
            fmt_value(mean),
            fmt_value(median)
        )
    } else {
        format!(
            "The mean ({}) is below the median ({}), suggesting a left-skewed \
             distribution pulled down by small values.",
            fmt_value(mean),
            fmt_value(median)
        )
    }
}

/// Reads the skewness coefficient, if one is defined.
#[must_use]
pub fn skewness_reading(summary: &DescriptiveSummary) -> Option<String> {
    let g1 = summary.skewness?;
    let shape = if g1.abs() < 0.5 {
        "approximately symmetric"
    } else if g1 > 0.0 {
        "right-skewed (long upper tail)"
    } else {
        "left-skewed (long lower tail)"
    };
    Some(format!("Skewness = {g1:.3}: the distribution is {shape}."))
}

/// Reads the excess kurtosis, if one is defined.
#[must_use]
pub fn kurtosis_reading(summary: &DescriptiveSummary) -> Option<String> {
    let g2 = summary.kurtosis?;
    let shape = if g2.abs() < 0.5 {
        "mesokurtic, with tails like a normal distribution"
    } else if g2 > 0.0 {
        "leptokurtic, with heavier tails than a normal distribution"
    } else {
        "platykurtic, with lighter tails than a normal distribution"
    };
    Some(format!("Excess kurtosis = {g2:.3}: {shape}."))
}

/// Bands the coefficient of variation into low / moderate / high relative
/// variability.
#[must_use]
pub fn cv_reading(summary: &DescriptiveSummary) -> Option<String> {
    let cv = summary.cv.as_ref()?;
    if cv.near_zero_mean {
        return Some(format!(
            "CV = {:.2}%, but the mean is nearly zero, so this figure is not \
             meaningful.",
            cv.percent
        ));
    }
    let band = if cv.percent.abs() < 10.0 {
        "low relative variability"
    } else if cv.percent.abs() < 30.0 {
        "moderate relative variability"
    } else {
        "high relative variability"
    };
    Some(format!(
        "CV = {:.2}%: the data shows {band} compared to its mean.",
        cv.percent
    ))
}

/// The Empirical Rule intervals μ ± kσ for k = 1, 2, 3, with the share of
/// this dataset actually inside each.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn empirical_rule(data: &Dataset, kind: VarianceKind) -> Vec<String> {
    let Ok(sd) = variability::std_dev(data, kind) else {
        return Vec::new();
    };
    let mean = center::mean(data);
    let n = data.n() as f64;
    [(1.0, 68.0), (2.0, 95.0), (3.0, 99.7)]
        .iter()
        .map(|&(k, expected)| {
            let (lo, hi) = (sd.mul_add(-k, mean), sd.mul_add(k, mean));
            let inside = data.values().iter().filter(|&&x| x >= lo && x <= hi).count();
            format!(
                "μ ± {k}σ = [{}, {}]: contains {inside} of {} values ({:.0}%, \
                 normal reference {expected}%)",
                fmt_value(lo),
                fmt_value(hi),
                data.n(),
                100.0 * inside as f64 / n,
            )
        })
        .collect()
}

/// Reports the 1.5 × IQR fences and any observations outside them.
#[must_use]
pub fn outlier_reading(data: &Dataset) -> String {
    let q = variability::quartiles(data);
    let flagged = variability::outliers(data);
    if flagged.is_empty() {
        format!(
            "No observations fall outside the 1.5 × IQR fences [{}, {}].",
            fmt_value(q.lower_fence()),
            fmt_value(q.upper_fence())
        )
    } else {
        let list = flagged
            .iter()
            .map(|v| fmt_value(*v))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Potential outliers outside the 1.5 × IQR fences [{}, {}]: {list}.",
            fmt_value(q.lower_fence()),
            fmt_value(q.upper_fence())
        )
    }
}

/// The full narrative block for a summary: shape, tails, relative spread,
/// Empirical Rule coverage, and outliers.
#[must_use]
pub fn narrative(data: &Dataset, summary: &DescriptiveSummary) -> Vec<String> {
    let mut lines = vec![center_comparison(summary)];
    lines.extend(skewness_reading(summary));
    lines.extend(kurtosis_reading(summary));
    lines.extend(cv_reading(summary));
    lines.extend(empirical_rule(data, summary.kind));
    lines.push(outlier_reading(data));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use statlab_stats::Dataset;

    fn summarize(values: &[f64]) -> (Dataset, DescriptiveSummary) {
        let data = Dataset::new(values.iter().copied()).unwrap();
        let summary = DescriptiveSummary::new(&data, VarianceKind::Sample).unwrap();
        (data, summary)
    }

    #[test]
    fn symmetric_data_reads_symmetric() {
        let (_, s) = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(center_comparison(&s).contains("roughly symmetric"));
    }

    #[test]
    fn right_skew_detected_from_mean_above_median() {
        let (_, s) = summarize(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert!(center_comparison(&s).contains("right-skewed"));
    }

    #[test]
    fn left_skew_detected_from_mean_below_median() {
        let (_, s) = summarize(&[-100.0, 4.0, 5.0, 6.0, 7.0]);
        assert!(center_comparison(&s).contains("left-skewed"));
    }

    #[test]
    fn skewness_reading_names_the_tail() {
        let (_, s) = summarize(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert!(skewness_reading(&s).unwrap().contains("right-skewed"));
    }

    #[test]
    fn cv_reading_bands_high() {
        // mean 30, s ≈ 15.8: CV ≈ 52.7%, high band.
        let (_, s) = summarize(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(cv_reading(&s).unwrap().contains("high relative variability"));
    }

    #[test]
    fn empirical_rule_covers_all_three_bands() {
        let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let lines = empirical_rule(&data, VarianceKind::Sample);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("99.7%"));
    }

    #[test]
    fn outlier_reading_flags_extreme_value() {
        let data =
            Dataset::new([260.0, 290.0, 300.0, 320.0, 330.0, 340.0, 340.0, 520.0]).unwrap();
        assert!(outlier_reading(&data).contains("520"));
    }

    #[test]
    fn narrative_always_ends_with_outlier_line() {
        let (data, s) = summarize(&[5.0, 12.0, 6.0, 8.0, 14.0]);
        let lines = narrative(&data, &s);
        assert!(lines.last().unwrap().contains("IQR fences"));
    }
}
