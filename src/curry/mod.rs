//! The currying adapter.
//!
//! Every operation in this crate has a full form that takes all of its
//! arguments and a partial form that takes everything except the data and
//! returns a function awaiting it. This module provides the adapter behind
//! that convention in two flavours:
//!
//! - [`curry2`] / [`curry3`]: statically typed. The argument count is chosen
//!   by calling [`Curried2::call`] or [`Curried2::bind`], so an unsupported
//!   count is a compile error.
//! - [`Curried`]: checked at run time over a single argument type, returning
//!   [`InvalidArityError`] for an unsupported count. The
//!   [`dynamic`](crate::dynamic) layer is built on it.
//!
//! # Relation to the `_with` Forms
//!
//! [`curry2`] and [`curry3`] are standalone public utilities. The partial
//! forms in [`crate::iterate`] (`map_with`, `reduce_with`, ...) are written
//! by hand instead of through `bind`: they return a function that accepts an
//! object borrowed for *any* lifetime, while `bind` fixes its remaining
//! argument to a single type, and so to a single borrow lifetime. Both follow
//! the same contract, so for an object `o` that outlives the bound function:
//!
//! ```rust
//! use keyed::curry::curry2;
//! use keyed::iterate::{some, some_with};
//! use keyed::object;
//!
//! let object = object! { "a" => 1, "b" => 2 };
//! let is_two = |value: &i32, _key: &String| *value == 2;
//!
//! let curried = curry2(|predicate, object| some(predicate, object));
//! assert_eq!(curried.call(is_two, &object), some_with(is_two)(&object));
//! assert_eq!(curried.bind(is_two)(&object), some_with(is_two)(&object));
//! ```
//!
//! # Binding Order
//!
//! Arguments are bound leading-first. Since every operation takes its data
//! last, binding all leading arguments yields a function of the data, which
//! is what point-free pipelines need.
//!
//! # Laws
//!
//! For a binary `f`:
//!
//! ```text
//! curry2(f).call(a, b) == curry2(f).bind(a)(b) == f(a, b)
//! ```
//!
//! For a ternary `f`:
//!
//! ```text
//! curry3(f).call(a, b, c) == curry3(f).bind(a, b)(c) == f(a, b, c)
//! ```

mod error;
mod runtime;
mod typed;

pub use error::InvalidArityError;
pub use runtime::{Application, Arity, Curried};
pub use typed::{Curried2, Curried3, curry2, curry3};

static_assertions::assert_impl_all!(Curried<String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(InvalidArityError: Send, Sync, std::error::Error);
