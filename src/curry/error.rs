//! Error type for the runtime-checked currying adapter.

use thiserror::Error;

/// A curried function was invoked with an argument count it does not accept.
///
/// An unapplied curried function accepts either its full arity or one
/// argument fewer. A deferred function returned by a partial application
/// accepts exactly the arguments it is still missing.
///
/// # Examples
///
/// ```rust
/// use keyed::curry::InvalidArityError;
///
/// let error = InvalidArityError::new("map", vec![2, 1], 0);
/// assert_eq!(error.to_string(), "map: expected 2 or 1 arguments, received 0");
///
/// let error = InvalidArityError::new("reduce", vec![1], 3);
/// assert_eq!(error.to_string(), "reduce: expected 1 argument, received 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: expected {}, received {}", .function, describe_counts(.expected), .received)]
pub struct InvalidArityError {
    /// The name of the curried function that rejected the call.
    pub function: &'static str,
    /// The argument counts the function would have accepted.
    pub expected: Vec<usize>,
    /// The argument count that was supplied.
    pub received: usize,
}

impl InvalidArityError {
    /// Creates a new error for `function`.
    #[must_use]
    pub const fn new(function: &'static str, expected: Vec<usize>, received: usize) -> Self {
        Self {
            function,
            expected,
            received,
        }
    }
}

fn describe_counts(counts: &[usize]) -> String {
    let listed = counts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    let noun = if counts == [1] { "argument" } else { "arguments" };
    format!("{listed} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![3, 2], 4, "reduce: expected 3 or 2 arguments, received 4")]
    #[case(vec![2, 1], 0, "reduce: expected 2 or 1 arguments, received 0")]
    #[case(vec![1], 2, "reduce: expected 1 argument, received 2")]
    #[case(vec![2], 1, "reduce: expected 2 arguments, received 1")]
    fn test_invalid_arity_error_display(
        #[case] expected: Vec<usize>,
        #[case] received: usize,
        #[case] message: &str,
    ) {
        let error = InvalidArityError::new("reduce", expected, received);
        assert_eq!(error.to_string(), message);
    }
}
