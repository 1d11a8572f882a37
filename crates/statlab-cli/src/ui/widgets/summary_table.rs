use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use statlab_stats::summary::DescriptiveSummary;

use super::fmt_stat;

/// Read-only pane listing every computed statistic.
pub struct SummaryTable<'a> {
    pub summary: &'a DescriptiveSummary,
}

impl Widget for SummaryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let s = self.summary;
        let mode = if s.mode.values.is_empty() {
            "none".to_string()
        } else {
            format!("{} ({})", s.mode.display_values(), s.mode.modality)
        };
        let cv = s.cv.as_ref().map_or_else(
            || "undefined".to_string(),
            |cv| format!("{:.2}%", cv.percent),
        );
        let opt = |v: Option<f64>| v.map_or_else(|| "undefined".to_string(), |v| format!("{v:.3}"));

        let mut text = vec![
            Line::raw(format!("  Count:    {:>10}", s.count)),
            Line::raw(format!("  Mean:     {:>10}", fmt_stat(s.mean))),
            Line::raw(format!("  Median:   {:>10}", fmt_stat(s.median))),
            Line::raw(format!("  Mode:     {mode:>10}")),
            Line::raw(format!("  Min:      {:>10}", fmt_stat(s.min))),
            Line::raw(format!("  Max:      {:>10}", fmt_stat(s.max))),
            Line::raw(format!("  Range:    {:>10}", fmt_stat(s.range))),
            Line::raw(format!(
                "  {:<9} {:>10}",
                format!("{}:", s.kind.variance_symbol()),
                fmt_stat(s.variance)
            )),
            Line::raw(format!(
                "  {:<9} {:>10}",
                format!("{}:", s.kind.std_dev_symbol()),
                fmt_stat(s.std_dev)
            )),
            Line::raw(format!("  Q1:       {:>10}", fmt_stat(s.quartiles.q1))),
            Line::raw(format!("  Q3:       {:>10}", fmt_stat(s.quartiles.q3))),
            Line::raw(format!("  IQR:      {:>10}", fmt_stat(s.quartiles.iqr))),
            Line::raw(format!("  CV:       {cv:>10}")),
            Line::raw(format!("  Skewness: {:>10}", opt(s.skewness))),
            Line::raw(format!("  Kurtosis: {:>10}", opt(s.kurtosis))),
        ];
        let p = &s.percentiles;
        for (label, value) in [
            ("P10", p.p10),
            ("P25", p.p25),
            ("P50", p.p50),
            ("P75", p.p75),
            ("P90", p.p90),
        ] {
            text.push(Line::raw(format!("  {label}:      {:>10}", fmt_stat(value))));
        }

        let paragraph = Paragraph::new(text).block(
            Block::bordered().title(format!("Summary ({} statistics)", s.kind)),
        );
        Widget::render(paragraph, area, buf);
    }
}
