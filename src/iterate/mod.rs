//! Array-style operations over the entries of an [`Object`](crate::object::Object).
//!
//! Every operation makes a single pass over the object in enumeration order
//! and returns a new value. The input is only ever borrowed.
//!
//! # Calling Convention
//!
//! Callbacks come first and the data comes last. Each operation has two
//! entry points:
//!
//! | Full application             | Partial application            |
//! |------------------------------|--------------------------------|
//! | [`map`]`(f, &obj)`           | [`map_with`]`(f)(&obj)`        |
//! | [`filter`]`(p, &obj)`        | [`filter_with`]`(p)(&obj)`     |
//! | [`reduce`]`(f, init, &obj)`  | [`reduce_with`]`(f, init)(&obj)` |
//! | [`some`]`(p, &obj)`          | [`some_with`]`(p)(&obj)`       |
//! | [`every`]`(p, &obj)`         | [`every_with`]`(p)(&obj)`      |
//! | [`map_to_array`]`(f, &obj)`  | [`map_to_array_with`]`(f)(&obj)` |
//! | [`from_array`]`(k, v, &arr)` | [`from_array_with`]`(k, v)(&arr)` |
//!
//! Callbacks receive `(value, key)`; reducers receive
//! `(accumulator, value, key)`. The full forms accept `FnMut` callbacks and
//! let results borrow from the input. The partial forms accept `Fn` callbacks
//! and can be applied to any number of objects.
//!
//! # Laws
//!
//! - `keys(&map(f, &m)) == keys(&m)`
//! - `reduce(f, init, &empty) == init`
//! - `some(p, &empty) == false` and `every(p, &empty) == true`
//! - `map_to_array(f, &m).len() == m.len()`
//! - `op(args.., &m) == op_with(args..)(&m)`
//!
//! # Examples
//!
//! ```rust
//! use keyed::iterate::{filter_with, map_with};
//! use keyed::object;
//!
//! let positive = filter_with(|value: &i32, _key: &String| *value > 0);
//! let doubled = map_with(|value: &i32, _key: &String| value * 2);
//!
//! let object = object! { "a" => -1, "b" => 2, "c" => 3 };
//! assert_eq!(doubled(&positive(&object)), object! { "b" => 4, "c" => 6 });
//! ```

mod convert;
mod fold;
mod transform;

pub use convert::{from_array, from_array_with, keys, values};
pub use fold::{every, every_with, reduce, reduce_with, some, some_with};
pub use transform::{filter, filter_with, map, map_to_array, map_to_array_with, map_with};
