//! Built-in example datasets.
//!
//! Each is a small classroom-scale sample chosen to exercise a different
//! behavior: a strong single mode, a near-symmetric count distribution, an
//! obvious high outlier, a roughly normal sample, and a tiny n = 5 set where
//! every derivation step is easy to follow by hand.

use statlab_stats::{Dataset, DatasetError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, derive_more::Display)]
pub enum SampleDataset {
    /// Shoe prices, unimodal with a heavy cluster at $70
    #[display("shoe prices ($)")]
    ShoePrices,
    /// Gallons of milk bought per week by 25 households
    #[display("milk purchases (gal/week)")]
    MilkPurchases,
    /// Sodium per serving in breakfast cereals, one clear outlier
    #[display("sodium content (mg)")]
    SodiumContent,
    /// Ages of 20 faculty members
    #[display("faculty ages (years)")]
    FacultyAges,
    /// Petal counts of five flowers
    #[display("flower petals")]
    FlowerPetals,
}

impl SampleDataset {
    pub const ALL: [Self; 5] = [
        Self::ShoePrices,
        Self::MilkPurchases,
        Self::SodiumContent,
        Self::FacultyAges,
        Self::FlowerPetals,
    ];

    #[must_use]
    pub fn values(self) -> &'static [f64] {
        match self {
            Self::ShoePrices => &[
                40.0, 60.0, 65.0, 65.0, 65.0, 68.0, 68.0, 70.0, 70.0, 70.0, 70.0, 70.0, 70.0,
                74.0, 75.0, 75.0, 90.0, 95.0,
            ],
            Self::MilkPurchases => &[
                0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0,
                3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 5.0,
            ],
            Self::SodiumContent => &[260.0, 290.0, 300.0, 320.0, 330.0, 340.0, 340.0, 520.0],
            Self::FacultyAges => &[
                34.0, 48.0, 70.0, 63.0, 52.0, 52.0, 35.0, 50.0, 37.0, 43.0, 53.0, 43.0, 52.0,
                44.0, 42.0, 31.0, 36.0, 48.0, 43.0, 26.0,
            ],
            Self::FlowerPetals => &[5.0, 12.0, 6.0, 8.0, 14.0],
        }
    }

    pub fn dataset(self) -> Result<Dataset, DatasetError> {
        Dataset::new(self.values().iter().copied())
    }

    /// The sample after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use statlab_stats::MAX_OBSERVATIONS;

    use super::*;

    #[test]
    fn every_sample_builds_a_valid_dataset() {
        for sample in SampleDataset::ALL {
            let data = sample.dataset().unwrap();
            assert!(data.n() <= MAX_OBSERVATIONS, "{sample}");
        }
    }

    #[test]
    fn next_cycles_through_all_samples() {
        let mut current = SampleDataset::ShoePrices;
        for _ in 0..SampleDataset::ALL.len() {
            current = current.next();
        }
        assert_eq!(current, SampleDataset::ShoePrices);
    }

    #[test]
    fn sodium_sample_contains_its_outlier() {
        assert!(SampleDataset::SodiumContent.values().contains(&520.0));
    }
}
