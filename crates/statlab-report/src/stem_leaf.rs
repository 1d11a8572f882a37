//! Text stem-and-leaf display.

use std::collections::BTreeMap;

use statlab_stats::Dataset;

/// Tolerance for deciding a scaled value is a whole number.
const INTEGER_EPS: f64 = 1e-9;

/// Largest decimal shift tried before falling back to rounding.
const MAX_SCALE: u32 = 6;

fn is_whole(x: f64) -> bool {
    (x - x.round()).abs() < INTEGER_EPS
}

/// Smallest power of ten that turns every value into a whole number, capped
/// at [`MAX_SCALE`]. Zero means the data is already integral.
fn decimal_scale(values: &[f64]) -> u32 {
    for k in 0..=MAX_SCALE {
        let factor = 10f64.powi(i32::try_from(k).unwrap_or(i32::MAX));
        if values.iter().all(|&v| is_whole(v * factor)) {
            return k;
        }
    }
    MAX_SCALE
}

/// Renders a stem-and-leaf display of the dataset.
///
/// Integral data splits on the tens digit; fractional data is first scaled
/// by the smallest power of ten that makes every value whole, and the key
/// line states the resulting leaf unit. Stems with no leaves between the
/// extremes are still printed, so gaps in the data stay visible.
#[expect(clippy::cast_possible_truncation)]
#[must_use]
pub fn stem_and_leaf(data: &Dataset) -> String {
    let scale = decimal_scale(data.sorted());
    let factor = 10f64.powi(i32::try_from(scale).unwrap_or(i32::MAX));
    let scaled: Vec<i64> = data
        .sorted()
        .iter()
        .map(|&v| (v * factor).round() as i64)
        .collect();

    let mut leaves: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
    for &v in &scaled {
        leaves.entry(v.div_euclid(10)).or_default().push(v.rem_euclid(10));
    }
    // Dataset is never empty, so the scaled extremes bound the stems.
    let first = scaled[0].div_euclid(10);
    let last = scaled[scaled.len() - 1].div_euclid(10);

    let stem_width = leaves.keys().map(|s| s.to_string().len()).max().unwrap_or(1);
    let mut out = String::new();
    out.push_str(&format!("{:>stem_width$} | Leaf\n", "Stem"));
    for stem in first..=last {
        let row = leaves.get(&stem).map_or_else(String::new, |ls| {
            ls.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        });
        out.push_str(&format!("{stem:>stem_width$} | {row}\n"));
    }

    let example = scaled[0];
    #[expect(clippy::cast_precision_loss)]
    let key_value = example as f64 / factor;
    out.push_str(&format!(
        "Key: {}|{} = {key_value}",
        example.div_euclid(10),
        example.rem_euclid(10)
    ));
    if scale > 0 {
        out.push_str(&format!("  (leaf unit = {})", 1.0 / factor));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        Dataset::new(values.iter().copied()).unwrap()
    }

    #[test]
    fn integer_data_splits_on_tens() {
        let out = stem_and_leaf(&dataset(&[40.0, 60.0, 65.0, 68.0, 70.0, 70.0, 75.0, 90.0]));
        assert!(out.contains("4 | 0"));
        assert!(out.contains("6 | 0 5 8"));
        assert!(out.contains("7 | 0 0 5"));
        assert!(out.contains("9 | 0"));
        assert!(out.contains("Key: 4|0 = 40"));
    }

    #[test]
    fn empty_stems_between_extremes_are_printed() {
        let out = stem_and_leaf(&dataset(&[10.0, 35.0]));
        assert!(out.contains("2 | \n"));
    }

    #[test]
    fn fractional_data_is_scaled_and_keyed() {
        let out = stem_and_leaf(&dataset(&[1.2, 1.5, 2.3]));
        assert!(out.contains("1 | 2 5"));
        assert!(out.contains("2 | 3"));
        assert!(out.contains("leaf unit = 0.1"));
        assert!(out.contains("Key: 1|2 = 1.2"));
    }

    #[test]
    fn negative_values_keep_leaves_nonnegative() {
        let out = stem_and_leaf(&dataset(&[-12.0, -5.0, 3.0]));
        // −12 lives on stem −2 with leaf 8 under euclidean split.
        assert!(out.contains("-2 | 8"));
    }

    #[test]
    fn leaves_are_sorted_within_a_stem() {
        let out = stem_and_leaf(&dataset(&[78.0, 71.0, 75.0]));
        assert!(out.contains("7 | 1 5 8"));
    }
}
