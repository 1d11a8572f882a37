use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Chart, Dataset as ChartData, GraphType, Widget},
};
use statlab_report::normal;
use statlab_stats::{
    Dataset, StatsError, VarianceKind, center, histogram::Histogram, variability,
};

fn axis(title: &str, bounds: [f64; 2]) -> Axis<'_> {
    Axis::default().title(title).bounds(bounds).labels([
        format!("{:.1}", bounds[0]),
        format!("{:.1}", f64::midpoint(bounds[0], bounds[1])),
        format!("{:.1}", bounds[1]),
    ])
}

/// Normal probability plot: ordered observations against theoretical normal
/// quantiles, with the y = x̄ + s·z reference line. Points hugging the line
/// indicate approximate normality.
pub struct NormalProbabilityPlot {
    points: Vec<(f64, f64)>,
    reference: [(f64, f64); 2],
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl NormalProbabilityPlot {
    /// Fails when the spread is undefined for the chosen variance kind.
    pub fn new(data: &Dataset, kind: VarianceKind) -> Result<Self, StatsError> {
        let mean = center::mean(data);
        let sd = variability::std_dev(data, kind)?;
        let quantiles = normal::normal_quantiles(data.n());

        let points = quantiles
            .iter()
            .copied()
            .zip(data.sorted().iter().copied())
            .collect::<Vec<_>>();
        let (z_lo, z_hi) = (quantiles[0], quantiles[quantiles.len() - 1]);
        let reference = [
            (z_lo, sd.mul_add(z_lo, mean)),
            (z_hi, sd.mul_add(z_hi, mean)),
        ];

        let y_lo = data.min().min(reference[0].1);
        let y_hi = data.max().max(reference[1].1);
        let y_pad = 0.05 * (y_hi - y_lo).max(f64::EPSILON);
        Ok(Self {
            points,
            reference,
            x_bounds: [z_lo - 0.2, z_hi + 0.2],
            y_bounds: [y_lo - y_pad, y_hi + y_pad],
        })
    }
}

impl Widget for NormalProbabilityPlot {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let observed = ChartData::default()
            .name("observed")
            .marker(Marker::Dot)
            .style(Style::default().fg(Color::Cyan))
            .data(&self.points);
        let reference = ChartData::default()
            .name("x̄ + s·z")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&self.reference);

        let chart = Chart::new(vec![observed, reference])
            .block(Block::bordered().title("Normal probability plot"))
            .x_axis(axis("Theoretical quantile", self.x_bounds))
            .y_axis(axis("Observed value", self.y_bounds));

        Widget::render(chart, area, buf);
    }
}

/// Overlays the sample's frequency polygon with the density of the normal
/// distribution fitted to its mean and spread.
pub struct DistributionComparison {
    density: Vec<(f64, f64)>,
    curve: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl DistributionComparison {
    const CURVE_POINTS: usize = 100;

    /// Fails when the spread is undefined for the chosen variance kind.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(data: &Dataset, kind: VarianceKind) -> Result<Self, StatsError> {
        let mean = center::mean(data);
        let sd = variability::std_dev(data, kind)?;
        let hist = Histogram::auto(data);
        let n = data.n() as f64;

        // Relative-frequency density per bin midpoint, so the polygon and
        // the pdf share a scale.
        let density = hist
            .bins
            .iter()
            .map(|bin| {
                let width = (bin.range.end - bin.range.start).max(f64::EPSILON);
                let mid = f64::midpoint(bin.range.start, bin.range.end);
                (mid, bin.count as f64 / (n * width))
            })
            .collect::<Vec<_>>();

        let x_lo = data.min().min(sd.mul_add(-3.0, mean));
        let x_hi = data.max().max(sd.mul_add(3.0, mean));
        let step = (x_hi - x_lo) / (Self::CURVE_POINTS - 1) as f64;
        let curve = (0..Self::CURVE_POINTS)
            .map(|i| {
                let x = step.mul_add(i as f64, x_lo);
                (x, normal::normal_pdf(x, mean, sd))
            })
            .collect::<Vec<_>>();

        let y_hi = density
            .iter()
            .map(|&(_, y)| y)
            .chain(curve.iter().map(|&(_, y)| y))
            .max_by(f64::total_cmp)
            .unwrap_or(1.0);
        Ok(Self {
            density,
            curve,
            x_bounds: [x_lo, x_hi],
            y_bounds: [0.0, 1.1 * y_hi],
        })
    }
}

impl Widget for DistributionComparison {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let sample = ChartData::default()
            .name("sample density")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&self.density);
        let normal = ChartData::default()
            .name("fitted normal")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&self.curve);

        let chart = Chart::new(vec![sample, normal])
            .block(Block::bordered().title("Sample vs fitted normal"))
            .x_axis(axis("Value", self.x_bounds))
            .y_axis(axis("Density", self.y_bounds));

        Widget::render(chart, area, buf);
    }
}
