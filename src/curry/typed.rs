//! Statically typed currying for binary and ternary functions.
//!
//! The argument count is part of the method name: `call` takes every
//! argument and runs the function, `bind` takes all but the last and returns
//! a function of the last. Supplying any other number of arguments does not
//! compile.

use std::sync::Arc;

/// A binary function that can be applied fully or with its first argument.
///
/// # Examples
///
/// ```rust
/// use keyed::curry::curry2;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let curried = curry2(subtract);
/// assert_eq!(curried.call(10, 3), 7);
///
/// let from_ten = curried.bind(10);
/// assert_eq!(from_ten(3), 7);
/// assert_eq!(from_ten(4), 6);
/// ```
pub struct Curried2<F> {
    function: Arc<F>,
}

impl<F> Clone for Curried2<F> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

/// Wraps a binary function in a [`Curried2`].
#[inline]
pub fn curry2<F>(function: F) -> Curried2<F> {
    Curried2 {
        function: Arc::new(function),
    }
}

impl<F> Curried2<F> {
    /// Applies the function to both arguments.
    #[inline]
    pub fn call<A, B, R>(&self, first: A, second: B) -> R
    where
        F: Fn(A, B) -> R,
    {
        (self.function)(first, second)
    }

    /// Binds the first argument, returning a function of the second.
    ///
    /// The bound argument is cloned on every call, so the returned function
    /// can be applied any number of times.
    pub fn bind<A, B, R>(&self, first: A) -> impl Fn(B) -> R + Clone + use<F, A, B, R>
    where
        F: Fn(A, B) -> R,
        A: Clone,
    {
        let function = Arc::clone(&self.function);
        move |second| function(first.clone(), second)
    }
}

/// A ternary function that can be applied fully or with its first two arguments.
///
/// # Examples
///
/// ```rust
/// use keyed::curry::curry3;
///
/// let clamp = curry3(|low: i32, high: i32, value: i32| value.max(low).min(high));
/// assert_eq!(clamp.call(0, 10, 42), 10);
///
/// let percent = clamp.bind(0, 100);
/// assert_eq!(percent(-5), 0);
/// assert_eq!(percent(55), 55);
/// ```
pub struct Curried3<F> {
    function: Arc<F>,
}

impl<F> Clone for Curried3<F> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

/// Wraps a ternary function in a [`Curried3`].
#[inline]
pub fn curry3<F>(function: F) -> Curried3<F> {
    Curried3 {
        function: Arc::new(function),
    }
}

impl<F> Curried3<F> {
    /// Applies the function to all three arguments.
    #[inline]
    pub fn call<A, B, C, R>(&self, first: A, second: B, third: C) -> R
    where
        F: Fn(A, B, C) -> R,
    {
        (self.function)(first, second, third)
    }

    /// Binds the first two arguments, returning a function of the third.
    pub fn bind<A, B, C, R>(
        &self,
        first: A,
        second: B,
    ) -> impl Fn(C) -> R + Clone + use<F, A, B, C, R>
    where
        F: Fn(A, B, C) -> R,
        A: Clone,
        B: Clone,
    {
        let function = Arc::clone(&self.function);
        move |third| function(first.clone(), second.clone(), third)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn concat(first: String, second: &str) -> String {
        first + second
    }

    #[rstest]
    fn test_curry2_call_matches_bind() {
        let curried = curry2(concat);
        let hello = curried.bind("Hello, ".to_string());
        assert_eq!(hello("World"), curried.call("Hello, ".to_string(), "World"));
        assert_eq!(hello("Rust"), "Hello, Rust");
    }

    #[rstest]
    fn test_curry3_bound_function_is_cloneable() {
        let curried = curry3(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c);
        let bound = curried.bind(1, 2);
        let copy = bound.clone();
        assert_eq!(bound(3), 123);
        assert_eq!(copy(4), 124);
    }

    #[rstest]
    fn test_bind_outlives_curried() {
        let bound = curry2(|a: i32, b: i32| a - b).bind(5);
        assert_eq!(bound(2), 3);
    }
}
