use clap::ValueEnum as _;

use crate::samples::SampleDataset;

pub(crate) fn run() {
    for sample in SampleDataset::ALL {
        let flag = sample
            .to_possible_value()
            .map_or_else(String::new, |v| v.get_name().to_string());
        let values = sample
            .values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{flag:<16} {sample} (n = {})", sample.values().len());
        println!("    {values}");
    }
}
