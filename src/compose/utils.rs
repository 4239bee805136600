//! Helper combinators for building callbacks.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// [`values`](crate::iterate::values) is [`map_to_array`](crate::iterate::map_to_array)
/// with this as its transform.
///
/// # Examples
///
/// ```
/// use keyed::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) == f(a, b)`.
///
/// Useful for reusing a `(key, value)` function as a `(value, key)` callback.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use keyed::compose::flip;
/// use keyed::iterate::map_to_array;
/// use keyed::object;
///
/// fn describe(key: &String, value: &i32) -> String {
///     format!("{key} is {value}")
/// }
///
/// let object = object! { "a" => 1 };
/// assert_eq!(map_to_array(flip(describe), &object), vec!["a is 1"]);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        let flipped_twice = flip(flip(subtract));
        assert_eq!(flipped_twice(10, 3), subtract(10, 3));
    }
}
