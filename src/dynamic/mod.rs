//! Dynamically typed object operations over JSON values.
//!
//! The typed operations in [`crate::iterate`] reject a wrong argument count
//! or a non-object argument at compile time. This module serves hosts where
//! those facts are only known at run time, such as a scripting bridge or a
//! pipeline described in a configuration file.
//!
//! Objects are [`serde_json::Value::Object`]s, whose key order is the
//! document order. Callbacks are host functions over JSON values (see
//! [`Callback`]). Every operation is a [`Curried`](crate::curry::Curried)
//! function, so it accepts either its full argument list or everything but
//! the data.
//!
//! # Examples
//!
//! ```rust
//! use keyed::dynamic::{self, Argument, DynamicError, Outcome};
//! use serde_json::{Value, json};
//!
//! let over_one = Argument::callback(|arguments: &[Value]| json!(arguments[0].as_i64() > Some(1)));
//!
//! // Partial application: bind the predicate, supply the data later.
//! let Outcome::Deferred(filter_over_one) = dynamic::filter().invoke(vec![over_one]).unwrap() else {
//!     unreachable!()
//! };
//! let result = filter_over_one.invoke(vec![json!({ "a": 1, "b": 2, "c": 3 }).into()]).unwrap();
//! assert_eq!(result.into_value(), Some(json!({ "b": 2, "c": 3 })));
//!
//! // Unsupported argument counts are rejected.
//! let error = dynamic::filter().invoke(vec![]).unwrap_err();
//! assert!(matches!(error, DynamicError::InvalidArity(_)));
//! ```

mod argument;
mod error;
mod operation;

pub use argument::{Argument, Callback, truthy};
pub use error::DynamicError;
pub use operation::{
    Operation, Outcome, every, filter, from_array, keys, map, map_to_array, operation, reduce,
    some, values,
};

static_assertions::assert_impl_all!(Operation: Send, Sync, Clone);
