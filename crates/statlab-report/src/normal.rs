//! Normal-distribution helpers for the probability plot and the
//! distribution-comparison overlay.

use std::f64::consts::{PI, SQRT_2};

/// Density of the standard normal distribution at `z`.
#[must_use]
pub fn standard_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

/// Density of N(mean, sd²) at `x`. Returns NaN for a non-positive `sd`.
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    if sd <= 0.0 {
        return f64::NAN;
    }
    standard_normal_pdf((x - mean) / sd) / sd
}

/// Cumulative distribution function of the standard normal.
#[must_use]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Abramowitz & Stegun 7.1.26 error-function approximation, accurate to
/// about 1.5e-7.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / P.mul_add(x, 1.0);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Quantile function of the standard normal, via the Abramowitz & Stegun
/// 26.2.23 rational approximation (absolute error below 4.5e-4).
///
/// Returns NaN outside (0, 1); the open endpoints map to ∓∞.
#[must_use]
pub fn inverse_normal_cdf(p: f64) -> f64 {
    const C0: f64 = 2.515_517;
    const C1: f64 = 0.802_853;
    const C2: f64 = 0.010_328;
    const D1: f64 = 1.432_788;
    const D2: f64 = 0.189_269;
    const D3: f64 = 0.001_308;

    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    // The approximation covers the lower tail; the upper tail follows by
    // symmetry.
    if p > 0.5 {
        return -inverse_normal_cdf(1.0 - p);
    }

    let t = (-2.0 * p.ln()).sqrt();
    let numerator = C2.mul_add(t, C1).mul_add(t, C0);
    let denominator = D3.mul_add(t, D2).mul_add(t, D1).mul_add(t, 1.0);
    -(t - numerator / denominator)
}

/// Blom plotting position for rank `i` (1-based) of `n` observations:
/// (i − 0.375) / (n + 0.25).
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn plotting_position(i: usize, n: usize) -> f64 {
    (i as f64 - 0.375) / (n as f64 + 0.25)
}

/// Theoretical standard-normal quantiles for the ordered values of a sample
/// of size `n`, under Blom plotting positions.
#[must_use]
pub fn normal_quantiles(n: usize) -> Vec<f64> {
    (1..=n)
        .map(|i| inverse_normal_cdf(plotting_position(i, n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_peaks_at_the_mean() {
        let peak = standard_normal_pdf(0.0);
        assert!((peak - 0.398_942_280_401).abs() < 1e-9);
        assert!(standard_normal_pdf(1.0) < peak);
        assert!((normal_pdf(5.0, 5.0, 2.0) - peak / 2.0).abs() < 1e-12);
    }

    #[test]
    fn cdf_matches_tabulated_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-4);
        assert!((standard_normal_cdf(-1.0) - 0.158_655).abs() < 1e-4);
    }

    #[test]
    fn quantile_matches_tabulated_values() {
        assert!(inverse_normal_cdf(0.5).abs() < 1e-6);
        assert!((inverse_normal_cdf(0.975) - 1.96).abs() < 5e-4);
        assert!((inverse_normal_cdf(0.025) + 1.96).abs() < 5e-4);
        assert!((inverse_normal_cdf(0.841_345) - 1.0).abs() < 5e-4);
    }

    #[test]
    fn quantile_is_antisymmetric() {
        for p in [0.01, 0.1, 0.3, 0.45] {
            let lo = inverse_normal_cdf(p);
            let hi = inverse_normal_cdf(1.0 - p);
            assert!((lo + hi).abs() < 1e-9, "p = {p}");
        }
    }

    #[test]
    fn quantile_edge_cases() {
        assert_eq!(inverse_normal_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_normal_cdf(1.0), f64::INFINITY);
        assert!(inverse_normal_cdf(-0.1).is_nan());
        assert!(inverse_normal_cdf(1.1).is_nan());
    }

    #[test]
    fn quantile_round_trips_through_cdf() {
        for p in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let z = inverse_normal_cdf(p);
            assert!((standard_normal_cdf(z) - p).abs() < 1e-3, "p = {p}");
        }
    }

    #[test]
    fn plotting_positions_are_symmetric_and_ordered() {
        let qs = normal_quantiles(10);
        assert_eq!(qs.len(), 10);
        assert!(qs.windows(2).all(|w| w[0] < w[1]));
        for i in 0..5 {
            assert!((qs[i] + qs[9 - i]).abs() < 1e-9);
        }
    }
}
