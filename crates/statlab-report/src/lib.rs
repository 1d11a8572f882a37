//! Teaching-oriented reporting on top of `statlab-stats`.
//!
//! This crate turns computed statistics into material a learner can read:
//!
//! - [`derivation`]: step-by-step worked derivations for each measure
//! - [`interpret`]: narrative interpretation of a full summary (symmetry,
//!   skewness, kurtosis, relative variability, Empirical Rule, outliers)
//! - [`stem_leaf`]: textual stem-and-leaf plots
//! - [`normal`]: normal-distribution helpers backing the probability plot
//!   and distribution-comparison chart
//!
//! Everything here is presentation-free text and numbers; terminal rendering
//! lives in the CLI crate.

pub mod derivation;
pub mod interpret;
pub mod normal;
pub mod stem_leaf;

/// Formats a value compactly for derivation text: integers without a
/// fractional part, everything else with four decimals.
#[must_use]
pub(crate) fn fmt_value(x: f64) -> String {
    if (x - x.round()).abs() < 1e-9 && x.abs() < 1e15 {
        format!("{}", x.round())
    } else {
        format!("{x:.4}")
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_value;

    #[test]
    fn integers_render_without_decimals() {
        assert_eq!(fmt_value(70.0), "70");
        assert_eq!(fmt_value(-3.0), "-3");
    }

    #[test]
    fn fractions_render_with_four_decimals() {
        assert_eq!(fmt_value(2.5), "2.5000");
        assert_eq!(fmt_value(1.581_138_83), "1.5811");
    }
}
