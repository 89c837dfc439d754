use thiserror::Error;

/// Errors reported by the selection routines and the comparison trial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Selection was attempted on an empty slice.
    #[error("at least one element required")]
    EmptyInput,

    /// The selected median disagrees with the median of the sorted copy.
    #[error("selected median {selected} does not match sorted median {sorted}")]
    MedianMismatch { selected: i64, sorted: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyInput.to_string(),
            "at least one element required"
        );
        assert_eq!(
            Error::MedianMismatch {
                selected: 4,
                sorted: 5
            }
            .to_string(),
            "selected median 4 does not match sorted median 5"
        );
    }
}
