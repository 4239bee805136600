//! Errors raised by the dynamically typed operations.

use thiserror::Error;

use crate::curry::InvalidArityError;

/// An error from invoking a dynamic [`Operation`](super::Operation).
///
/// Arity errors are raised as soon as the argument count is known. Type
/// errors are raised when the saturated call runs and finds an argument of
/// the wrong kind.
///
/// # Examples
///
/// ```rust
/// use keyed::dynamic::DynamicError;
///
/// let error = DynamicError::ExpectedObject { operation: "map", found: "array" };
/// assert_eq!(error.to_string(), "map: expected an object, found array");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynamicError {
    /// The operation was invoked with an unsupported number of arguments.
    #[error(transparent)]
    InvalidArity(#[from] InvalidArityError),

    /// The data argument was not a JSON object.
    #[error("{operation}: expected an object, found {found}")]
    ExpectedObject {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// The kind of value that was supplied.
        found: &'static str,
    },

    /// The data argument was not a JSON array.
    #[error("{operation}: expected an array, found {found}")]
    ExpectedArray {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// The kind of value that was supplied.
        found: &'static str,
    },

    /// A value was supplied where a callback was expected.
    #[error("{operation}: argument {position} must be a callback")]
    ExpectedCallback {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// One-based position of the argument.
        position: usize,
    },

    /// A callback was supplied where a value was expected.
    #[error("{operation}: argument {position} must be a value")]
    ExpectedData {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// One-based position of the argument.
        position: usize,
    },

    /// A key extractor returned something that cannot name a property.
    #[error("{operation}: cannot use {found} as a key")]
    InvalidKey {
        /// The operation that rejected the key.
        operation: &'static str,
        /// The kind of value the extractor returned.
        found: &'static str,
    },
}
