//! Creating containers from nullable values and from computations that may panic.
//!
//! This is the one place that catches panics: a panicking computation becomes an absent or failed container.
//! Short-circuits of an enclosing do block are never swallowed; they continue to unwind to their block.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::bind;
use crate::error::{Caught, Panic};
use crate::option::Option::{self, None, Some};
use crate::result::Result::{self, Err, Ok};

/// Runs `f`, catching a panic it raises. Resumes the unwind of a do block short-circuit.
fn guard<R>(f: impl FnOnce() -> R) -> std::result::Result<R, Box<dyn Any + Send>> {
  panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
    if bind::is_short_circuit(&*payload) {
      panic::resume_unwind(payload)
    }
    payload
  })
}


impl<T> Option<T> {
  /// Adapts a nullable value: `std::option::Option::None` becomes `None`, and any present value becomes `Some`,
  /// including `0`, `""`, and `NaN`.
  #[inline]
  pub fn of(value: std::option::Option<T>) -> Self {
    Self::from(value)
  }

  /// Runs `f`; its value is wrapped with [`of`](Self::of). A panic raised by `f` yields `None`.
  pub fn from_fn(f: impl FnOnce() -> std::option::Option<T>) -> Self {
    match guard(f) {
      std::result::Result::Ok(value) => Self::of(value),
      std::result::Result::Err(_payload) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = %Panic::from_payload(_payload), "computation panicked; returning None");
        None
      }
    }
  }

  /// `Some` of all values in order if every option is `Some`, otherwise `None`. Stops at the first `None`.
  #[inline]
  pub fn sequence(options: impl IntoIterator<Item=Option<T>>) -> Option<Vec<T>> {
    options.into_iter().collect()
  }
}

impl<A, V: FromIterator<A>> FromIterator<Option<A>> for Option<V> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=Option<A>>>(iter: I) -> Self {
    iter.into_iter().map(Option::into_std).collect::<std::option::Option<V>>().into()
  }
}


impl<T, E> Result<T, E> {
  /// `Ok(value)` for a present value, `Err(error)` for `std::option::Option::None`.
  #[inline]
  pub fn of(value: std::option::Option<T>, error: E) -> Self {
    Option::of(value).ok_or(error)
  }

  /// Runs `f`; its value is wrapped with [`of`](Self::of). A panic raised by `f` yields `Err(error)`.
  pub fn from_fn(f: impl FnOnce() -> std::option::Option<T>, error: E) -> Self {
    match guard(f) {
      std::result::Result::Ok(value) => Self::of(value, error),
      std::result::Result::Err(_payload) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = %Panic::from_payload(_payload), "computation panicked; returning the given error");
        Err(error)
      }
    }
  }

  /// `Ok` of all values in order if every result is `Ok`, otherwise the first `Err`. Stops at the first `Err`.
  #[inline]
  pub fn sequence(results: impl IntoIterator<Item=Result<T, E>>) -> Result<Vec<T>, E> {
    results.into_iter().collect()
  }
}

impl<T> Result<T, Panic> {
  /// `Ok(f())`, or `Err` of the normalized panic if `f` panics.
  pub fn from_throwable(f: impl FnOnce() -> T) -> Self {
    guard(f).map_err(|payload| {
      let panic = Panic::from_payload(payload);
      #[cfg(feature = "tracing")]
      tracing::debug!(%panic, "computation panicked; returning it as an error");
      panic
    }).into()
  }
}

impl<T, E> Result<T, Caught<E>> {
  /// Runs a fallible computation: a returned error becomes `Err(Caught::Error)`, a panic `Err(Caught::Panic)`.
  pub fn from_fallible(f: impl FnOnce() -> std::result::Result<T, E>) -> Self {
    match Result::from_throwable(f) {
      Ok(std::result::Result::Ok(value)) => Ok(value),
      Ok(std::result::Result::Err(error)) => Err(Caught::Error(error)),
      Err(panic) => Err(Caught::Panic(panic)),
    }
  }
}

impl<A, E, V: FromIterator<A>> FromIterator<Result<A, E>> for Result<V, E> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=Result<A, E>>>(iter: I) -> Self {
    iter.into_iter().map(Result::into_std).collect::<std::result::Result<V, E>>().into()
  }
}


/// Free-function forms of the [`Option`] adapters.
pub mod option {
  use crate::option::Option;

  #[inline]
  pub fn of<T>(value: std::option::Option<T>) -> Option<T> { Option::of(value) }
  #[inline]
  pub fn from<T>(f: impl FnOnce() -> std::option::Option<T>) -> Option<T> { Option::from_fn(f) }
  #[inline]
  pub fn sequence<T>(options: impl IntoIterator<Item=Option<T>>) -> Option<Vec<T>> { Option::sequence(options) }
}

/// Free-function forms of the [`Result`] adapters.
pub mod result {
  use crate::error::{Caught, Panic};
  use crate::result::Result;

  #[inline]
  pub fn of<T, E>(value: std::option::Option<T>, error: E) -> Result<T, E> { Result::of(value, error) }
  #[inline]
  pub fn from<T, E>(f: impl FnOnce() -> std::option::Option<T>, error: E) -> Result<T, E> { Result::from_fn(f, error) }
  #[inline]
  pub fn from_throwable<T>(f: impl FnOnce() -> T) -> Result<T, Panic> { Result::from_throwable(f) }
  #[inline]
  pub fn from_fallible<T, E>(f: impl FnOnce() -> std::result::Result<T, E>) -> Result<T, Caught<E>> {
    Result::from_fallible(f)
  }
  #[inline]
  pub fn sequence<T, E>(results: impl IntoIterator<Item=Result<T, E>>) -> Result<Vec<T>, E> {
    Result::sequence(results)
  }
}
