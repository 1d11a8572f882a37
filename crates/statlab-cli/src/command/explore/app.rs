use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Tabs, Wrap},
};
use statlab_report::{derivation, interpret, stem_leaf};
use statlab_stats::{
    Dataset, StatsError, VarianceKind, histogram::Histogram, summary::DescriptiveSummary,
};

use crate::{
    samples::SampleDataset,
    ui::widgets::{
        BoxPlot, DistributionComparison, HistogramChart, NormalProbabilityPlot, SummaryTable,
        fmt_stat,
    },
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    #[default]
    Center,
    Spread,
    Visualize,
    Summary,
}

impl Tab {
    const ALL: [Self; 4] = [Self::Center, Self::Spread, Self::Visualize, Self::Summary];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum CenterMeasure {
    #[default]
    Mean,
    Median,
    Mode,
    CompareAll,
}

impl CenterMeasure {
    const ALL: [Self; 4] = [Self::Mean, Self::Median, Self::Mode, Self::CompareAll];

    fn label(self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::Median => "Median",
            Self::Mode => "Mode",
            Self::CompareAll => "Compare all",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum SpreadMeasure {
    #[default]
    Range,
    Variance,
    StdDev,
    Iqr,
    Cv,
    CompareAll,
}

impl SpreadMeasure {
    const ALL: [Self; 6] = [
        Self::Range,
        Self::Variance,
        Self::StdDev,
        Self::Iqr,
        Self::Cv,
        Self::CompareAll,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Range => "Range",
            Self::Variance => "Variance",
            Self::StdDev => "Standard deviation",
            Self::Iqr => "IQR",
            Self::Cv => "Coefficient of variation",
            Self::CompareAll => "Compare all",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum VizKind {
    #[default]
    Histogram,
    BoxPlot,
    StemLeaf,
    NormalPlot,
    NormalOverlay,
}

impl VizKind {
    const ALL: [Self; 5] = [
        Self::Histogram,
        Self::BoxPlot,
        Self::StemLeaf,
        Self::NormalPlot,
        Self::NormalOverlay,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Histogram => "Histogram",
            Self::BoxPlot => "Box plot",
            Self::StemLeaf => "Stem-and-leaf",
            Self::NormalPlot => "Normal probability plot",
            Self::NormalOverlay => "Sample vs normal",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&m| m == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug)]
pub struct App {
    data: Dataset,
    sample: Option<SampleDataset>,
    kind: VarianceKind,
    tab: Tab,
    center: CenterMeasure,
    spread: SpreadMeasure,
    viz: VizKind,
    show_steps: bool,
    scroll: u16,
    should_exit: bool,
}

impl App {
    #[must_use]
    pub fn new(data: Dataset, sample: Option<SampleDataset>, kind: VarianceKind) -> Self {
        Self {
            data,
            sample,
            kind,
            tab: Tab::default(),
            center: CenterMeasure::default(),
            spread: SpreadMeasure::default(),
            viz: VizKind::default(),
            show_steps: true,
            scroll: 0,
            should_exit: false,
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_exit {
            terminal.draw(|f| self.draw(f))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn summary(&self) -> Result<DescriptiveSummary, StatsError> {
        DescriptiveSummary::new(&self.data, self.kind)
    }

    fn draw(&self, frame: &mut Frame) {
        let [title_area, tabs_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let source = self
            .sample
            .map_or_else(|| "custom data".to_string(), |s| s.to_string());
        let title = Text::from(format!(
            "Descriptive statistics — {source} (n = {}, {} statistics)",
            self.data.n(),
            self.kind
        ))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
        frame.render_widget(title, title_area);

        let tabs = Tabs::new(vec!["Center", "Spread", "Visualize", "Summary"])
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, tabs_area);

        match self.tab {
            Tab::Center => self.draw_center(frame, main_area),
            Tab::Spread => self.draw_spread(frame, main_area),
            Tab::Visualize => self.draw_visualize(frame, main_area),
            Tab::Summary => self.draw_summary(frame, main_area),
        }

        let help_text = Text::from(
            "Tab: View | ↑/↓: Select | s: Steps | p: Population/Sample | n: Next Sample | \
             PgUp/PgDn: Scroll | q/Esc: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();
        frame.render_widget(help_text, help_area);
    }

    fn draw_selector(&self, frame: &mut Frame, area: Rect, title: &str, items: &[&str], sel: usize) {
        let items = items
            .iter()
            .map(|label| ListItem::new(*label))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(Block::bordered().title(title.to_string()))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        let mut list_state = ListState::default();
        list_state.select(Some(sel));
        StatefulWidget::render(list, area, frame.buffer_mut(), &mut list_state);
    }

    fn split_panes(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(area)
    }

    fn derivation_text(&self, d: &derivation::Derivation) -> String {
        if self.show_steps {
            d.to_string()
        } else {
            format!("{}\n{}\n\nResult: {}", d.title, d.intro, d.result)
        }
    }

    fn draw_text_pane(&self, frame: &mut Frame, area: Rect, title: &str, text: String) {
        let paragraph = Paragraph::new(text)
            .block(Block::bordered().title(title.to_string()))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn draw_center(&self, frame: &mut Frame, area: Rect) {
        let [left, right] = Self::split_panes(area);
        let labels = CenterMeasure::ALL.map(CenterMeasure::label);
        self.draw_selector(
            frame,
            left,
            "Measures of center",
            &labels,
            self.center.index(),
        );

        let text = match self.center {
            CenterMeasure::Mean => self.derivation_text(&derivation::mean(&self.data)),
            CenterMeasure::Median => self.derivation_text(&derivation::median(&self.data)),
            CenterMeasure::Mode => self.derivation_text(&derivation::mode(&self.data)),
            CenterMeasure::CompareAll => self.compare_center_text(),
        };
        self.draw_text_pane(frame, right, self.center.label(), text);
    }

    fn compare_center_text(&self) -> String {
        let summary = match self.summary() {
            Ok(summary) => summary,
            Err(err) => return err.to_string(),
        };
        let mode = if summary.mode.values.is_empty() {
            "none".to_string()
        } else {
            format!(
                "{} ({})",
                summary.mode.display_values(),
                summary.mode.modality
            )
        };
        format!(
            "mean   = {}\nmedian = {}\nmode   = {mode}\n\n{}",
            fmt_stat(summary.mean),
            fmt_stat(summary.median),
            interpret::center_comparison(&summary)
        )
    }

    fn draw_spread(&self, frame: &mut Frame, area: Rect) {
        let [left, right] = Self::split_panes(area);
        let labels = SpreadMeasure::ALL.map(SpreadMeasure::label);
        self.draw_selector(
            frame,
            left,
            "Measures of variability",
            &labels,
            self.spread.index(),
        );

        let text = match self.spread {
            SpreadMeasure::Range => self.derivation_text(&derivation::range(&self.data)),
            SpreadMeasure::Variance => {
                self.fallible_derivation(derivation::variance(&self.data, self.kind))
            }
            SpreadMeasure::StdDev => {
                self.fallible_derivation(derivation::std_dev(&self.data, self.kind))
            }
            SpreadMeasure::Iqr => self.derivation_text(&derivation::iqr(&self.data)),
            SpreadMeasure::Cv => {
                self.fallible_derivation(derivation::coefficient_of_variation(&self.data))
            }
            SpreadMeasure::CompareAll => self.compare_spread_text(),
        };
        self.draw_text_pane(frame, right, self.spread.label(), text);
    }

    fn fallible_derivation(&self, d: Result<derivation::Derivation, StatsError>) -> String {
        match d {
            Ok(d) => self.derivation_text(&d),
            Err(err) => err.to_string(),
        }
    }

    fn compare_spread_text(&self) -> String {
        let summary = match self.summary() {
            Ok(summary) => summary,
            Err(err) => return err.to_string(),
        };
        let cv = summary.cv.as_ref().map_or_else(
            || "undefined (mean is zero)".to_string(),
            |cv| format!("{:.2}%", cv.percent),
        );
        let mut lines = vec![
            format!("range = {}", fmt_stat(summary.range)),
            format!(
                "{}    = {}",
                summary.kind.variance_symbol(),
                fmt_stat(summary.variance)
            ),
            format!(
                "{}     = {}",
                summary.kind.std_dev_symbol(),
                fmt_stat(summary.std_dev)
            ),
            format!("IQR   = {}", fmt_stat(summary.quartiles.iqr)),
            format!("CV    = {cv}"),
            String::new(),
        ];
        lines.extend(interpret::cv_reading(&summary));
        lines.extend(interpret::empirical_rule(&self.data, self.kind));
        lines.push(interpret::outlier_reading(&self.data));
        lines.join("\n")
    }

    fn draw_visualize(&self, frame: &mut Frame, area: Rect) {
        let [left, right] = Self::split_panes(area);
        let labels = VizKind::ALL.map(VizKind::label);
        self.draw_selector(frame, left, "Visualizations", &labels, self.viz.index());

        match self.viz {
            VizKind::Histogram => {
                let hist = Histogram::auto(&self.data);
                frame.render_widget(HistogramChart { histogram: &hist }, right);
            }
            VizKind::BoxPlot => frame.render_widget(BoxPlot::new(&self.data), right),
            VizKind::StemLeaf => self.draw_text_pane(
                frame,
                right,
                self.viz.label(),
                stem_leaf::stem_and_leaf(&self.data),
            ),
            VizKind::NormalPlot => match NormalProbabilityPlot::new(&self.data, self.kind) {
                Ok(plot) => frame.render_widget(plot, right),
                Err(err) => self.draw_text_pane(frame, right, self.viz.label(), err.to_string()),
            },
            VizKind::NormalOverlay => match DistributionComparison::new(&self.data, self.kind) {
                Ok(chart) => frame.render_widget(chart, right),
                Err(err) => self.draw_text_pane(frame, right, self.viz.label(), err.to_string()),
            },
        }
    }

    fn draw_summary(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(area);
        match self.summary() {
            Ok(summary) => {
                frame.render_widget(SummaryTable { summary: &summary }, left);
                let narrative = interpret::narrative(&self.data, &summary).join("\n\n");
                self.draw_text_pane(frame, right, "Interpretation", narrative);
            }
            Err(err) => {
                self.draw_text_pane(frame, area, "Summary", err.to_string());
            }
        }
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.code);
            }
            _ => {}
        }
        Ok(())
    }

    fn select_next(&mut self) {
        match self.tab {
            Tab::Center => self.center = self.center.next(),
            Tab::Spread => self.spread = self.spread.next(),
            Tab::Visualize => self.viz = self.viz.next(),
            Tab::Summary => return,
        }
        self.scroll = 0;
    }

    fn select_prev(&mut self) {
        match self.tab {
            Tab::Center => self.center = self.center.prev(),
            Tab::Spread => self.spread = self.spread.prev(),
            Tab::Visualize => self.viz = self.viz.prev(),
            Tab::Summary => return,
        }
        self.scroll = 0;
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Tab => {
                self.tab = self.tab.next();
                self.scroll = 0;
            }
            KeyCode::BackTab => {
                self.tab = self.tab.prev();
                self.scroll = 0;
            }
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(5),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(5),
            KeyCode::Char('s') => self.show_steps = !self.show_steps,
            KeyCode::Char('p') => {
                self.kind = match self.kind {
                    VarianceKind::Population => VarianceKind::Sample,
                    VarianceKind::Sample => VarianceKind::Population,
                };
            }
            KeyCode::Char('n') => {
                if let Some(sample) = self.sample {
                    let next = sample.next();
                    if let Ok(data) = next.dataset() {
                        self.sample = Some(next);
                        self.data = data;
                        self.scroll = 0;
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let data = Dataset::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        App::new(data, Some(SampleDataset::ShoePrices), VarianceKind::Sample)
    }

    #[test]
    fn tab_key_cycles_all_views_and_wraps() {
        let mut app = app();
        for _ in 0..Tab::ALL.len() {
            app.handle_key_event(KeyCode::Tab);
        }
        assert_eq!(app.tab, Tab::Center);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut app = app();
        app.handle_key_event(KeyCode::Up);
        assert_eq!(app.center, CenterMeasure::CompareAll);
        app.handle_key_event(KeyCode::Down);
        assert_eq!(app.center, CenterMeasure::Mean);
    }

    #[test]
    fn each_tab_keeps_its_own_selection() {
        let mut app = app();
        app.handle_key_event(KeyCode::Down);
        app.handle_key_event(KeyCode::Tab);
        app.handle_key_event(KeyCode::Down);
        app.handle_key_event(KeyCode::Down);
        assert_eq!(app.center, CenterMeasure::Median);
        assert_eq!(app.spread, SpreadMeasure::StdDev);
        assert_eq!(app.viz, VizKind::Histogram);
    }

    #[test]
    fn population_toggle_flips_variance_kind() {
        let mut app = app();
        app.handle_key_event(KeyCode::Char('p'));
        assert_eq!(app.kind, VarianceKind::Population);
        app.handle_key_event(KeyCode::Char('p'));
        assert_eq!(app.kind, VarianceKind::Sample);
    }

    #[test]
    fn next_sample_replaces_the_dataset() {
        let mut app = app();
        app.handle_key_event(KeyCode::Char('n'));
        assert_eq!(app.sample, Some(SampleDataset::MilkPurchases));
        assert_eq!(app.data.n(), SampleDataset::MilkPurchases.values().len());
    }

    #[test]
    fn custom_data_ignores_next_sample() {
        let data = Dataset::new([1.0, 2.0, 3.0]).unwrap();
        let mut app = App::new(data, None, VarianceKind::Sample);
        app.handle_key_event(KeyCode::Char('n'));
        assert_eq!(app.sample, None);
        assert_eq!(app.data.n(), 3);
    }

    #[test]
    fn quit_keys_exit() {
        let mut app = app();
        app.handle_key_event(KeyCode::Esc);
        assert!(app.should_exit);
    }

    #[test]
    fn compare_text_is_renderable_for_every_sample() {
        for sample in SampleDataset::ALL {
            let app = App::new(
                sample.dataset().unwrap(),
                Some(sample),
                VarianceKind::Sample,
            );
            assert!(app.compare_center_text().contains("mean"));
            assert!(app.compare_spread_text().contains("IQR"));
        }
    }
}
