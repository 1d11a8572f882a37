use anyhow::Context;
use clap::{Parser, Subcommand};
use statlab_stats::{Dataset, VarianceKind};

use crate::{input, samples::SampleDataset};

mod explore;
mod list_samples;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Browse statistics interactively with a TUI
    Explore(#[clap(flatten)] explore::ExploreArg),
    /// Print a full descriptive summary
    Summary(#[clap(flatten)] summary::SummaryArg),
    /// List the built-in example datasets
    #[command(name = "samples")]
    ListSamples,
}

/// Which data to analyze, shared by every mode.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DataArg {
    /// Measurements as a comma- or space-separated list (up to 30 values)
    #[clap(long, conflicts_with = "sample")]
    data: Option<String>,
    /// Use a built-in example dataset instead
    #[clap(long, value_enum)]
    sample: Option<SampleDataset>,
    /// Treat the data as a full population (divisor n instead of n − 1)
    #[clap(long)]
    population: bool,
}

impl DataArg {
    /// Resolves to a dataset, defaulting to the shoe-prices sample when
    /// neither `--data` nor `--sample` is given.
    fn resolve(&self) -> anyhow::Result<(Dataset, Option<SampleDataset>)> {
        if let Some(text) = &self.data {
            let data = input::parse_dataset(text).context("invalid --data value")?;
            return Ok((data, None));
        }
        let sample = self.sample.unwrap_or(SampleDataset::ShoePrices);
        Ok((sample.dataset()?, Some(sample)))
    }

    fn variance_kind(&self) -> VarianceKind {
        if self.population {
            VarianceKind::Population
        } else {
            VarianceKind::Sample
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Explore(explore::ExploreArg::default())) {
        Mode::Explore(arg) => explore::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::ListSamples => list_samples::run(),
    }
    Ok(())
}
