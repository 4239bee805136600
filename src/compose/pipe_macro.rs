//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which threads a value through a
//! sequence of functions, the natural shape for chaining the partial forms of
//! the object operations.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// A stage written as `&f` receives a borrow of the previous result instead
/// of the result itself, so `pipe!(x, f, &g)` is `g(&f(x))`. The object
/// operations borrow their data, which makes `&` the usual way to chain them.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, &f)` - Returns `f(&x)`
/// - `pipe!(x, f, &g, h, ...)` - Returns `...h(g(&f(x)))`
///
/// # Examples
///
/// ## Chaining partial forms
///
/// ```
/// use keyed::iterate::{filter_with, map_to_array_with, map_with};
/// use keyed::{object, pipe};
///
/// let object = object! { "a" => 1, "b" => 2, "c" => 3 };
///
/// let labels = pipe!(
///     &object,
///     filter_with(|value: &i32, _key: &String| value % 2 == 1),
///     &map_with(|value: &i32, _key: &String| value * 10),
///     &map_to_array_with(|value: &i32, key: &String| format!("{key}:{value}")),
/// );
/// assert_eq!(labels, vec!["a:10", "c:30"]);
/// ```
///
/// ## Plain functions
///
/// ```
/// use keyed::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(3, square, double), 18);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single borrowing stage
    ($value:expr, & $function:expr $(,)?) => {
        $function(&$value)
    };

    // Single stage
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Borrowing stage followed by more stages
    ($value:expr, & $function:expr, $($remaining:tt)+) => {
        $crate::pipe!($function(&$value), $($remaining)+)
    };

    // Stage followed by more stages
    ($value:expr, $function:expr, $($remaining:tt)+) => {
        $crate::pipe!($function($value), $($remaining)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::iterate::{map_with, reduce_with};
    use crate::object::Object;

    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_pipe_borrowing_stage() {
        let object = Object::new().insert("a", 2).insert("b", 3);
        let product = pipe!(object, &reduce_with(|product: i32, value: &i32, _: &&str| product * value, 1));
        assert_eq!(product, 6);
    }

    #[test]
    fn test_pipe_mixes_owned_and_borrowed_stages() {
        let object = Object::new().insert("a", 1).insert("b", 2);
        let size = pipe!(
            &object,
            map_with(|value: &i32, _: &&str| value + 1),
            |mapped: Object<&str, i32>| mapped.len(),
        );
        assert_eq!(size, 2);
    }
}
