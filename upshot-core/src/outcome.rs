//! The outcome container and its combinators

use core::fmt;

/// Container for a successful value (`T`) or a failure (`E`)
///
/// An `Outcome` holds exactly one of the two payloads and never mutates after
/// construction; every combinator consumes `self` and produces a new value.
/// Failure is data, not a panic: the only way to observe which side is held
/// is through [`Outcome::is_success`] and the `value`/`error` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A computed value
    Success(T),
    /// An error value
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Create a successful outcome holding `value`
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome holding `error`
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Whether this outcome was constructed via the success path
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether this outcome holds an error
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The successful value, if any
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The error value, if any
    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrowing view of the container
    ///
    /// Lets the consuming accessors and combinators be used without giving up
    /// ownership: `outcome.as_ref().value()` yields `Option<&T>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply a transformation to a successful value
    ///
    /// On success, `transform` is invoked exactly once and its result is
    /// rewrapped as a success. On failure, the error is carried over unchanged
    /// and `transform` is never invoked. Panics raised by `transform` are not
    /// caught here; a transform that can fail should return an `Outcome` and
    /// be chained with [`Outcome::and_then`] instead.
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(transform(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply a transformation that itself returns an outcome
    ///
    /// On success, returns `transform(value)` directly with no re-wrapping,
    /// so a failure produced by the transform propagates as-is. On failure,
    /// the error is carried over unchanged and `transform` is never invoked.
    pub fn and_then<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => transform(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The successful value, or `default` when this is a failure
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// The successful value, or the result of `default` when this is a failure
    ///
    /// `default` is evaluated lazily: it runs exactly once on the failure
    /// path and never on the success path.
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default(),
        }
    }

    /// Convert into the standard library's `Result`
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success: {}", value),
            Outcome::Failure(error) => write!(f, "Failure: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_ref_borrows_both_variants() {
        let s: Outcome<String, String> = Outcome::success("ok".to_string());
        assert_eq!(s.as_ref().value(), Some(&"ok".to_string()));

        let f: Outcome<String, String> = Outcome::failure("bad".to_string());
        assert_eq!(f.as_ref().error(), Some(&"bad".to_string()));
        assert!(f.is_failure());
    }

    #[test]
    fn test_result_conversion_round_trip() {
        let ok: Outcome<i32, String> = Ok(7).into();
        assert_eq!(ok.into_result(), Ok(7));

        let err: Outcome<i32, String> = Err("nope".to_string()).into();
        assert_eq!(err.into_result(), Err("nope".to_string()));
    }
}
