/// Errors raised while constructing a [`Dataset`](crate::Dataset).
///
/// These correspond to invalid raw input; calculators never see a dataset
/// that failed construction.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    /// The input contained no values.
    #[display("dataset must contain at least one value")]
    Empty,
    /// The input exceeded the observation cap.
    #[display("dataset holds at most {max} values, got {count}")]
    TooManyValues { max: usize, count: usize },
    /// A value was NaN or infinite.
    #[display("dataset values must be finite, got {value}")]
    NonFinite { value: f64 },
}

/// Errors raised by the calculators themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The statistic needs more observations than the dataset provides,
    /// e.g. sample variance with a single value.
    #[display("statistic requires at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },
    /// The coefficient of variation is undefined for a zero mean.
    #[display("coefficient of variation is undefined when the mean is zero")]
    DegenerateMean,
}
