//! Currying with the argument count checked at run time.
//!
//! [`Curried`] is for hosts where the number of arguments is not known until
//! the call happens, such as the [`dynamic`](crate::dynamic) layer. All
//! arguments share one type `T`.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::InvalidArityError;

/// The fixed arity of a [`Curried`] function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Two arguments.
    Binary,
    /// Three arguments.
    Ternary,
}

impl Arity {
    /// Returns the number of arguments.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Binary => 2,
            Self::Ternary => 3,
        }
    }
}

type BinaryFunction<T, R> = dyn Fn(T, T) -> R + Send + Sync;
type TernaryFunction<T, R> = dyn Fn(T, T, T) -> R + Send + Sync;

enum Function<T, R> {
    Binary(Arc<BinaryFunction<T, R>>),
    Ternary(Arc<TernaryFunction<T, R>>),
}

impl<T, R> Clone for Function<T, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Binary(function) => Self::Binary(Arc::clone(function)),
            Self::Ternary(function) => Self::Ternary(Arc::clone(function)),
        }
    }
}

impl<T, R> Function<T, R> {
    const fn arity(&self) -> Arity {
        match self {
            Self::Binary(_) => Arity::Binary,
            Self::Ternary(_) => Arity::Ternary,
        }
    }
}

/// The result of invoking a [`Curried`] function.
#[derive(Debug)]
pub enum Application<T, R> {
    /// Every argument was supplied and the function ran.
    Complete(R),
    /// A prefix of the arguments was supplied. The contained function
    /// expects exactly the rest.
    Deferred(Curried<T, R>),
}

impl<T, R> Application<T, R> {
    /// Returns `true` if the function ran.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the result if the function ran.
    #[must_use]
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Deferred(_) => None,
        }
    }

    /// Returns the deferred function if only a prefix was supplied.
    #[must_use]
    pub fn deferred(self) -> Option<Curried<T, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Deferred(curried) => Some(curried),
        }
    }
}

/// A binary or ternary function plus the leading arguments bound so far.
///
/// A fresh `Curried` accepts either its full arity, in which case it runs,
/// or one argument fewer, in which case it returns a deferred `Curried`
/// holding those arguments. A deferred `Curried` accepts exactly the one
/// argument it is missing. Every other count is an [`InvalidArityError`].
///
/// Values are immutable: invoking never changes the receiver, so a
/// `Curried` can be invoked repeatedly and shared across threads.
///
/// # Examples
///
/// ```rust
/// use keyed::curry::{Application, Curried};
///
/// let add = Curried::binary("add", |first: i64, second: i64| first + second);
///
/// let result = add.invoke(vec![2, 3]).unwrap();
/// assert_eq!(result.complete(), Some(5));
///
/// let add_two = add.invoke(vec![2]).unwrap().deferred().unwrap();
/// assert_eq!(add_two.invoke(vec![40]).unwrap().complete(), Some(42));
///
/// assert!(add.invoke(vec![]).is_err());
/// assert!(add_two.invoke(vec![1, 2]).is_err());
/// ```
pub struct Curried<T, R> {
    name: &'static str,
    function: Function<T, R>,
    bound: Vec<T>,
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            function: self.function.clone(),
            bound: self.bound.clone(),
        }
    }
}

impl<T, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .field("bound", &self.bound.len())
            .finish()
    }
}

impl<T, R> Curried<T, R> {
    /// Wraps a binary function.
    pub fn binary<F>(name: &'static str, function: F) -> Self
    where
        F: Fn(T, T) -> R + Send + Sync + 'static,
    {
        Self {
            name,
            function: Function::Binary(Arc::new(function)),
            bound: Vec::new(),
        }
    }

    /// Wraps a ternary function.
    pub fn ternary<F>(name: &'static str, function: F) -> Self
    where
        F: Fn(T, T, T) -> R + Send + Sync + 'static,
    {
        Self {
            name,
            function: Function::Ternary(Arc::new(function)),
            bound: Vec::new(),
        }
    }

    /// Returns the name used in error messages.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the full arity of the underlying function.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.function.arity()
    }

    /// Returns the number of arguments still missing.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity().count() - self.bound.len()
    }

    /// Returns the arguments bound so far.
    #[inline]
    #[must_use]
    pub fn bound(&self) -> &[T] {
        &self.bound
    }

    /// Returns the argument counts this function accepts.
    #[must_use]
    pub fn accepted_counts(&self) -> Vec<usize> {
        let remaining = self.remaining();
        if self.bound.is_empty() {
            vec![remaining, remaining - 1]
        } else {
            vec![remaining]
        }
    }
}

impl<T: Clone, R> Curried<T, R> {
    /// Invokes the function with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArityError`] if the argument count is not one of
    /// [`accepted_counts`](Self::accepted_counts). No partial result is
    /// produced in that case.
    pub fn invoke(&self, arguments: Vec<T>) -> Result<Application<T, R>, InvalidArityError> {
        let received = arguments.len();
        let remaining = self.remaining();

        if received == remaining {
            let mut all = self.bound.clone();
            all.extend(arguments);
            trace!(function = self.name, "running curried function");
            return self.saturate(all).map(Application::Complete);
        }

        if self.bound.is_empty() && received + 1 == remaining {
            trace!(function = self.name, bound = received, "deferring curried function");
            return Ok(Application::Deferred(Self {
                name: self.name,
                function: self.function.clone(),
                bound: arguments,
            }));
        }

        let error = InvalidArityError::new(self.name, self.accepted_counts(), received);
        debug!(%error, "rejected curried call");
        Err(error)
    }

    fn saturate(&self, arguments: Vec<T>) -> Result<R, InvalidArityError> {
        let received = arguments.len();
        let mismatch = || InvalidArityError::new(self.name, vec![self.arity().count()], received);
        match &self.function {
            Function::Binary(function) => {
                let [first, second] = <[T; 2]>::try_from(arguments).map_err(|_| mismatch())?;
                Ok(function(first, second))
            }
            Function::Ternary(function) => {
                let [first, second, third] =
                    <[T; 3]>::try_from(arguments).map_err(|_| mismatch())?;
                Ok(function(first, second, third))
            }
        }
    }
}
