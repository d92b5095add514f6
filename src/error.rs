//! Error type for the checked scan entry points.
//!
//! The scans themselves never fail: empty and singleton inputs fall through to
//! their neutral result. The only reportable condition is a violated
//! precondition that a caller explicitly asked us to verify.

use thiserror::Error;

/// Errors reported by the `*_checked` entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Input to a sorted-order scan was not ascending.
    #[error("input not sorted ascending: sequence[{index}] = {current} follows {previous}")]
    Unsorted {
        /// Position of the first element smaller than its predecessor
        index: usize,
        /// Value at `index - 1`
        previous: i32,
        /// Value at `index`
        current: i32,
    },
}

/// Result alias for the checked entry points.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors with the first descent in `sequence`, if any.
pub(crate) fn check_ascending(sequence: &[i32]) -> Result<()> {
    match sequence.windows(2).position(|w| w[0] > w[1]) {
        None => Ok(()),
        Some(pos) => Err(ScanError::Unsorted {
            index: pos + 1,
            previous: sequence[pos],
            current: sequence[pos + 1],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_with_duplicates_passes() {
        assert_eq!(check_ascending(&[-3, -3, 0, 0, 7]), Ok(()));
        assert_eq!(check_ascending(&[]), Ok(()));
        assert_eq!(check_ascending(&[42]), Ok(()));
    }

    #[test]
    fn first_descent_is_reported() {
        let err = check_ascending(&[1, 4, 2, 0]).unwrap_err();
        assert_eq!(
            err,
            ScanError::Unsorted {
                index: 2,
                previous: 4,
                current: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "input not sorted ascending: sequence[2] = 2 follows 4"
        );
    }
}
