//! Results of computations that either succeed with a value ([`Ok`]) or fail with an error ([`Err`]).

use std::fmt::Debug;
use std::iter::FusedIterator;

pub use self::Result::{Err, Ok};

use crate::error::UnwrapError;
use crate::option::Option::{self, None, Some};

/// The result of a computation that may fail. The tag is fixed at construction; every combinator returns a new
/// instance.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
  Ok(T),
  Err(E),
}

impl<T, E> Result<T, E> {
  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Ok(_)) }
  #[inline]
  pub const fn is_err(&self) -> bool { !self.is_ok() }

  #[inline]
  pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Ok(value) => predicate(value),
      Err(_) => false,
    }
  }
  #[inline]
  pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
    match self {
      Ok(_) => false,
      Err(error) => predicate(error),
    }
  }

  /// Converts into an [`Option`] of the value, discarding the error.
  #[inline]
  pub fn ok(self) -> Option<T> {
    match self {
      Ok(value) => Some(value),
      Err(_) => None,
    }
  }
  /// Converts into an [`Option`] of the error, discarding the value.
  #[inline]
  pub fn err(self) -> Option<E> {
    match self {
      Ok(_) => None,
      Err(error) => Some(error),
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Result<&T, &E> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => Err(error),
    }
  }


  /// Returns the value, panicking with `message` followed by the error's description if this is `Err`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T where E: Debug {
    match self {
      Ok(value) => value,
      Err(error) => UnwrapError::ExpectWithCause { message: message.to_owned(), cause: format!("{:?}", error) }.abort(),
    }
  }
  /// Returns the value, panicking with the error's description if this is `Err`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T where E: Debug {
    match self {
      Ok(value) => value,
      Err(error) => UnwrapError::Err { error: format!("{:?}", error) }.abort(),
    }
  }
  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E where T: Debug {
    match self {
      Ok(value) => UnwrapError::ExpectWithCause { message: message.to_owned(), cause: format!("{:?}", value) }.abort(),
      Err(error) => error,
    }
  }
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E where T: Debug {
    match self {
      Ok(value) => UnwrapError::Ok { value: format!("{:?}", value) }.abort(),
      Err(error) => error,
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Ok(value) => value,
      Err(_) => default,
    }
  }
  /// Returns the value, or computes one from the error.
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce(E) -> T) -> T {
    match self {
      Ok(value) => value,
      Err(error) => default(error),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(|_| T::default())
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
    match self {
      Ok(value) => Ok(f(value)),
      Err(error) => Err(error),
    }
  }
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => Err(f(error)),
    }
  }
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Ok(value) => f(value),
      Err(_) => default,
    }
  }
  /// Returns `f(value)` on `Ok`, and `default()` on `Err`.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Ok(value) => f(value),
      Err(_) => default(),
    }
  }


  /// Returns `other` if this is `Ok`, otherwise this error.
  #[inline]
  pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
    match self {
      Ok(_) => other,
      Err(error) => Err(error),
    }
  }
  /// Returns this value if this is `Ok`, otherwise `other`. The error of `self` is discarded, so `other` may carry
  /// a different error type.
  #[inline]
  pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
    match self {
      Ok(value) => Ok(value),
      Err(_) => other,
    }
  }
  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => f(error),
    }
  }

  /// Chains a computation that may itself fail. Alias of [`and_then`](Self::and_then).
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
    match self {
      Ok(value) => f(value),
      Err(error) => Err(error),
    }
  }
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> { self.flat_map(f) }


  /// Calls `f` on the value for its side effect and returns what `f` returned, or `None` without calling `f` if
  /// this is `Err`. The receiver is borrowed and never changes.
  #[inline]
  pub fn tap<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
    match self {
      Ok(value) => Some(f(value)),
      Err(_) => None,
    }
  }
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Ok(value) = &self {
      f(value);
    }
    self
  }
  #[inline]
  pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
    if let Err(error) = &self {
      f(error);
    }
    self
  }

  /// Exhaustive dispatch: returns `ok(value)` or `err(error)`.
  #[inline]
  pub fn match_with<U>(self, ok: impl FnOnce(T) -> U, err: impl FnOnce(E) -> U) -> U {
    match self {
      Ok(value) => ok(value),
      Err(error) => err(error),
    }
  }


  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    self.as_ref().into_iter()
  }
}

impl<T, E> Result<Result<T, E>, E> {
  #[inline]
  pub fn flatten(self) -> Result<T, E> { self.flat_map(|inner| inner) }
}


/// Iterator over the value of an `Ok` [`Result`], yielding it at most once.
#[derive(Clone, Debug)]
pub struct IntoIter<T>(std::option::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> std::option::Option<T> { self.0.next() }
  #[inline]
  fn size_hint(&self) -> (usize, std::option::Option<usize>) { self.0.size_hint() }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> std::option::Option<T> { self.0.next_back() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

pub type Iter<'a, T> = IntoIter<&'a T>;

impl<T, E> IntoIterator for Result<T, E> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> IntoIter<T> { IntoIter(self.ok().into_std().into_iter()) }
}
impl<'a, T, E> IntoIterator for &'a Result<T, E> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
