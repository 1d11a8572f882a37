use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Direction,
    widgets::{Bar, BarChart, Block, Widget},
};
use statlab_stats::histogram::Histogram;

/// Horizontal bar chart of a binned frequency distribution, one labelled bar
/// per bin.
pub struct HistogramChart<'a> {
    pub histogram: &'a Histogram,
}

impl Widget for HistogramChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars = self
            .histogram
            .bins
            .iter()
            .map(|bin| {
                Bar::with_label(
                    format!("{:8.2}-{:8.2}", bin.range.start, bin.range.end),
                    bin.count,
                )
                .text_value(format!("{}", bin.count))
            })
            .collect::<Vec<_>>();

        let chart = BarChart::new(bars)
            .direction(Direction::Horizontal)
            .bar_gap(0)
            .block(Block::bordered().title(format!(
                "Histogram ({} bins, n = {})",
                self.histogram.bins.len(),
                self.histogram.total_count()
            )));

        Widget::render(chart, area, buf);
    }
}
