//! Descriptive statistics for small teaching datasets.
//!
//! This crate is the computation core of the statlab project. It computes
//! elementary descriptive statistics over a bounded, validated dataset of at
//! most [`MAX_OBSERVATIONS`] values:
//!
//! - **Central tendency** ([`center`]): mean, median, mode
//! - **Variability** ([`variability`]): range, variance, standard deviation,
//!   quartiles and IQR, coefficient of variation, outlier fences
//! - **Percentiles** ([`percentile`]): rank-interpolated percentile values
//! - **Summaries** ([`summary`]): five-number summary and the full
//!   descriptive-statistics record (skewness, kurtosis, percentile table)
//! - **Histograms** ([`histogram`]): frequency bins for visualization
//!
//! All functions are pure: the same [`Dataset`] and population/sample flag
//! always produce the same result, and nothing is cached between calls.
//!
//! # Conventions
//!
//! Ranked statistics (median, quartiles, percentiles) use the weighted-average
//! rank `p·(n+1)` with linear interpolation between adjacent order statistics.
//! This is one of several common quartile conventions; results will differ
//! from nearest-rank implementations. See [`percentile::percentile`].
//!
//! # Examples
//!
//! ```
//! use statlab_stats::{Dataset, VarianceKind, center, variability};
//!
//! let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0])?;
//! assert_eq!(center::mean(&data), 3.0);
//! assert_eq!(center::median(&data), 3.0);
//! assert_eq!(variability::variance(&data, VarianceKind::Population)?, 2.0);
//! assert_eq!(variability::variance(&data, VarianceKind::Sample)?, 2.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ```
//! use statlab_stats::{Dataset, VarianceKind, summary::DescriptiveSummary};
//!
//! let data = Dataset::new([5.0, 12.0, 6.0, 8.0, 14.0])?;
//! let report = DescriptiveSummary::new(&data, VarianceKind::Sample)?;
//! assert_eq!(report.mean, 9.0);
//! assert_eq!(report.median, 8.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    dataset::{Dataset, MAX_OBSERVATIONS},
    error::{DatasetError, StatsError},
    variability::VarianceKind,
};

pub mod center;
pub mod dataset;
pub mod error;
pub mod histogram;
pub mod percentile;
pub mod summary;
pub mod variability;
