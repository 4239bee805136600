//! # keyed
//!
//! Array-style operations over keyed mappings: `map`, `filter`, `reduce`,
//! `some`, `every`, conversion to and from sequences, and a currying adapter
//! that gives every operation a fully applied and a partially applied form.
//!
//! ## Overview
//!
//! - **Object**: [`Object`](object::Object), an insertion-ordered mapping
//!   from unique keys to values
//! - **Iteration**: single-pass operations over an object's entries, each
//!   returning a new value and leaving the input untouched
//! - **Currying**: typed and run-time checked adapters behind the
//!   `op(args.., data)` / `op_with(args..)(data)` convention
//! - **Composition**: [`pipe!`] plus `identity` and `flip` for point-free
//!   pipelines
//! - **Dynamic**: the same operations over JSON values with run-time arity
//!   and type checks
//!
//! ## Feature Flags
//!
//! - `dynamic`: JSON operation layer (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Object`
//! - `fxhash`: use `rustc-hash` for the key index
//! - `ahash`: use `ahash` for the key index
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use keyed::prelude::*;
//!
//! let object = object! { "a" => 1, "b" => 2, "c" => 3 };
//!
//! let mapped = map(|value, key| if key == "b" { value * 3 } else { value * 2 }, &object);
//! assert_eq!(mapped, object! { "a" => 2, "b" => 6, "c" => 6 });
//!
//! let total = reduce_with(|sum: i32, value: &i32, _key: &String| sum + value, 0);
//! assert_eq!(total(&mapped), 14);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the object type, the iteration operations, the currying
/// adapters and the composition helpers.
///
/// # Usage
///
/// ```rust
/// use keyed::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::curry::*;
    pub use crate::iterate::*;
    pub use crate::object;
    pub use crate::object::Object;
}

pub mod compose;
pub mod curry;
pub mod iterate;
pub mod object;

#[cfg(feature = "dynamic")]
pub mod dynamic;
