//! Parsing of user-entered measurement lists.

use statlab_stats::{Dataset, DatasetError};

/// Why a measurement string could not be turned into a dataset.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseInputError {
    /// A token was not a number.
    #[display("not a number: {token:?}")]
    #[from(skip)]
    BadToken { token: String },
    /// Tokenized fine but the values were rejected.
    #[display("{_0}")]
    Dataset(DatasetError),
}

/// Parses a comma- or whitespace-separated list of numbers into a dataset.
///
/// Empty tokens from doubled separators or a trailing comma are ignored, so
/// "1, 2,, 3," reads as three values.
pub fn parse_dataset(text: &str) -> Result<Dataset, ParseInputError> {
    let values = text
        .split([',', ' ', '\t', '\n'])
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| ParseInputError::BadToken {
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(values)?)
}

#[cfg(test)]
mod tests {
    use statlab_stats::MAX_OBSERVATIONS;

    use super::*;

    #[test]
    fn parses_comma_separated_values() {
        let data = parse_dataset("5, 12, 6, 8, 14").unwrap();
        assert_eq!(data.values(), &[5.0, 12.0, 6.0, 8.0, 14.0]);
    }

    #[test]
    fn parses_whitespace_and_mixed_separators() {
        let data = parse_dataset("1 2\t3\n4,5").unwrap();
        assert_eq!(data.n(), 5);
    }

    #[test]
    fn trailing_comma_is_harmless() {
        assert_eq!(parse_dataset("1, 2, 3,").unwrap().n(), 3);
    }

    #[test]
    fn bad_token_is_named_in_the_error() {
        let err = parse_dataset("1, two, 3").unwrap_err();
        assert_eq!(
            err,
            ParseInputError::BadToken {
                token: "two".to_string()
            }
        );
        assert_eq!(err.to_string(), "not a number: \"two\"");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            parse_dataset("  ,  "),
            Err(ParseInputError::Dataset(DatasetError::Empty))
        ));
    }

    #[test]
    fn too_many_values_is_rejected() {
        let text = (0..=MAX_OBSERVATIONS)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert!(matches!(
            parse_dataset(&text),
            Err(ParseInputError::Dataset(DatasetError::TooManyValues { .. }))
        ));
    }

    #[test]
    fn non_finite_literal_is_rejected() {
        assert!(matches!(
            parse_dataset("1, inf, 3"),
            Err(ParseInputError::Dataset(DatasetError::NonFinite { .. }))
        ));
    }
}
