mod box_plot;
mod charts;
mod histogram;
mod summary_table;

pub use self::{
    box_plot::BoxPlot,
    charts::{DistributionComparison, NormalProbabilityPlot},
    histogram::HistogramChart,
    summary_table::SummaryTable,
};

/// Drops the fraction for whole numbers, keeps two decimals otherwise.
pub(crate) fn fmt_stat(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{x:.0}")
    } else {
        format!("{x:.2}")
    }
}
