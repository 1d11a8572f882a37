use std::{io::Write as _, path::PathBuf};

use statlab_report::{derivation, interpret, stem_leaf};
use statlab_stats::{VarianceKind, summary::DescriptiveSummary};

use crate::{command::DataArg, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    data: DataArg,
    /// Emit the summary as JSON instead of tables
    #[clap(long)]
    json: bool,
    /// Include step-by-step derivations of every statistic
    #[clap(long, conflicts_with = "json")]
    steps: bool,
    /// Write to a file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn fmt(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{x:.0}")
    } else {
        format!("{x:.4}")
    }
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let (data, sample) = arg.data.resolve()?;
    let kind = arg.data.variance_kind();
    let summary = DescriptiveSummary::new(&data, kind)?;

    let mut out = Output::from_output_path(arg.output.clone())?;
    if arg.json {
        return out.write_json(&summary);
    }

    if let Some(sample) = sample {
        writeln!(out, "Dataset: {sample}")?;
    }
    writeln!(
        out,
        "Values ({}): {}",
        summary.count,
        data.values()
            .iter()
            .map(|v| fmt(*v))
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(out)?;

    writeln!(out, "Measures of center")?;
    writeln!(out, "  mean    {}", fmt(summary.mean))?;
    writeln!(out, "  median  {}", fmt(summary.median))?;
    if summary.mode.values.is_empty() {
        writeln!(out, "  mode    none")?;
    } else {
        writeln!(
            out,
            "  mode    {} ({}, frequency {})",
            summary.mode.display_values(),
            summary.mode.modality,
            summary.mode.frequency
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Measures of variability ({kind})", kind = summary.kind)?;
    writeln!(out, "  range   {}", fmt(summary.range))?;
    writeln!(
        out,
        "  {sym:<7} {}",
        fmt(summary.variance),
        sym = summary.kind.variance_symbol()
    )?;
    writeln!(
        out,
        "  {sym:<7} {}",
        fmt(summary.std_dev),
        sym = summary.kind.std_dev_symbol()
    )?;
    writeln!(out, "  IQR     {}", fmt(summary.quartiles.iqr))?;
    match &summary.cv {
        Some(cv) => writeln!(out, "  CV      {:.2}%", cv.percent)?,
        None => writeln!(out, "  CV      undefined")?,
    }
    writeln!(out)?;

    let five = summary.five_number_summary();
    writeln!(out, "Five-number summary")?;
    writeln!(
        out,
        "  min {}  Q1 {}  median {}  Q3 {}  max {}",
        fmt(five.min),
        fmt(five.q1),
        fmt(five.median),
        fmt(five.q3),
        fmt(five.max)
    )?;
    writeln!(out)?;

    let p = &summary.percentiles;
    writeln!(out, "Percentiles")?;
    writeln!(
        out,
        "  P10 {}  P25 {}  P50 {}  P75 {}  P90 {}",
        fmt(p.p10),
        fmt(p.p25),
        fmt(p.p50),
        fmt(p.p75),
        fmt(p.p90)
    )?;
    writeln!(out)?;

    writeln!(out, "Shape")?;
    match summary.skewness {
        Some(g1) => writeln!(out, "  skewness  {g1:.4}")?,
        None => writeln!(out, "  skewness  undefined")?,
    }
    match summary.kurtosis {
        Some(g2) => writeln!(out, "  kurtosis  {g2:.4} (excess)")?,
        None => writeln!(out, "  kurtosis  undefined")?,
    }
    writeln!(out)?;

    writeln!(out, "Stem-and-leaf")?;
    for line in stem_leaf::stem_and_leaf(&data).lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    writeln!(out, "Interpretation")?;
    for line in interpret::narrative(&data, &summary) {
        writeln!(out, "  {line}")?;
    }

    if arg.steps {
        writeln!(out)?;
        write_derivations(&mut out, &data, kind)?;
    }
    Ok(())
}

fn write_derivations(
    out: &mut Output,
    data: &statlab_stats::Dataset,
    kind: VarianceKind,
) -> anyhow::Result<()> {
    let mut blocks = vec![
        derivation::mean(data),
        derivation::median(data),
        derivation::mode(data),
        derivation::range(data),
    ];
    blocks.push(derivation::variance(data, kind)?);
    blocks.push(derivation::std_dev(data, kind)?);
    blocks.push(derivation::iqr(data));
    // A zero mean makes the CV undefined, not the summary unusable.
    if let Ok(block) = derivation::coefficient_of_variation(data) {
        blocks.push(block);
    }

    for block in blocks {
        writeln!(out, "{block}")?;
        writeln!(out)?;
    }
    Ok(())
}
