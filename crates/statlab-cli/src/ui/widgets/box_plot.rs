use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::Text,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Line, Points, Rectangle},
    },
};
use statlab_stats::{Dataset, summary::FiveNumberSummary, variability};

use super::fmt_stat;

/// Horizontal box-and-whisker plot with 1.5 × IQR whiskers and flagged
/// outliers, drawn on a braille canvas.
pub struct BoxPlot {
    five: FiveNumberSummary,
    /// Most extreme observations still inside the fences.
    whisker_lo: f64,
    whisker_hi: f64,
    outliers: Vec<f64>,
}

impl BoxPlot {
    #[must_use]
    pub fn new(data: &Dataset) -> Self {
        let five = FiveNumberSummary::new(data);
        let q = variability::quartiles(data);
        let whisker_lo = data
            .sorted()
            .iter()
            .copied()
            .find(|&x| x >= q.lower_fence())
            .unwrap_or(five.min);
        let whisker_hi = data
            .sorted()
            .iter()
            .copied()
            .rev()
            .find(|&x| x <= q.upper_fence())
            .unwrap_or(five.max);
        Self {
            five,
            whisker_lo,
            whisker_hi,
            outliers: variability::outliers(data),
        }
    }
}

impl Widget for BoxPlot {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [canvas_area, label_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let span = (self.five.max - self.five.min).max(f64::EPSILON);
        let pad = 0.05 * span;
        let x_bounds = [self.five.min - pad, self.five.max + pad];
        let Self {
            five,
            whisker_lo,
            whisker_hi,
            outliers,
        } = self;
        let outlier_points = outliers.iter().map(|&x| (x, 2.0)).collect::<Vec<_>>();

        let canvas = Canvas::default()
            .block(Block::bordered().title("Box plot"))
            .x_bounds(x_bounds)
            .y_bounds([0.0, 4.0])
            .paint(move |ctx| {
                // Whiskers along the centre line, with end caps.
                ctx.draw(&Line {
                    x1: whisker_lo,
                    y1: 2.0,
                    x2: five.q1,
                    y2: 2.0,
                    color: Color::Gray,
                });
                ctx.draw(&Line {
                    x1: five.q3,
                    y1: 2.0,
                    x2: whisker_hi,
                    y2: 2.0,
                    color: Color::Gray,
                });
                for x in [whisker_lo, whisker_hi] {
                    ctx.draw(&Line {
                        x1: x,
                        y1: 1.6,
                        x2: x,
                        y2: 2.4,
                        color: Color::Gray,
                    });
                }

                // The box spans Q1..Q3.
                ctx.draw(&Rectangle {
                    x: five.q1,
                    y: 1.0,
                    width: five.q3 - five.q1,
                    height: 2.0,
                    color: Color::Cyan,
                });
                ctx.draw(&Line {
                    x1: five.median,
                    y1: 1.0,
                    x2: five.median,
                    y2: 3.0,
                    color: Color::Yellow,
                });

                ctx.draw(&Points {
                    coords: &outlier_points,
                    color: Color::Red,
                });
            });
        Widget::render(canvas, canvas_area, buf);

        let labels = Text::from(format!(
            "min {}  Q1 {}  median {}  Q3 {}  max {}{}",
            fmt_stat(five.min),
            fmt_stat(five.q1),
            fmt_stat(five.median),
            fmt_stat(five.q3),
            fmt_stat(five.max),
            if outliers.is_empty() {
                String::new()
            } else {
                format!(
                    "  outliers: {}",
                    outliers
                        .iter()
                        .map(|v| fmt_stat(*v))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        ))
        .centered();
        Widget::render(labels, label_area, buf);
    }
}
