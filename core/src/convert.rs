//! Conversions between the two containers, and to/from their `std` counterparts.
//!
//! `std::option::Option` is the ambient nullable value: its `None` is the only value that converts into an absent
//! container.

use crate::option::Option::{self, None, Some};
use crate::result::Result::{self, Err, Ok};

impl<T> Option<T> {
  #[inline]
  pub fn into_std(self) -> std::option::Option<T> {
    match self {
      Some(value) => std::option::Option::Some(value),
      None => std::option::Option::None,
    }
  }
}

impl<T> From<std::option::Option<T>> for Option<T> {
  #[inline]
  fn from(value: std::option::Option<T>) -> Self {
    match value {
      std::option::Option::Some(value) => Some(value),
      std::option::Option::None => None,
    }
  }
}
impl<T> From<Option<T>> for std::option::Option<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { value.into_std() }
}


impl<T, E> Result<T, E> {
  /// Converts into a `std` result, so that `?` can be used on it.
  #[inline]
  pub fn into_std(self) -> std::result::Result<T, E> {
    match self {
      Ok(value) => std::result::Result::Ok(value),
      Err(error) => std::result::Result::Err(error),
    }
  }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
  #[inline]
  fn from(value: std::result::Result<T, E>) -> Self {
    match value {
      std::result::Result::Ok(value) => Ok(value),
      std::result::Result::Err(error) => Err(error),
    }
  }
}
impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
  #[inline]
  fn from(value: Result<T, E>) -> Self { value.into_std() }
}


impl<T, E> Option<Result<T, E>> {
  /// `None` becomes `Ok(None)`; `Some(Ok(v))` becomes `Ok(Some(v))`; `Some(Err(e))` becomes `Err(e)`.
  #[inline]
  pub fn transpose(self) -> Result<Option<T>, E> {
    match self {
      Some(Ok(value)) => Ok(Some(value)),
      Some(Err(error)) => Err(error),
      None => Ok(None),
    }
  }
}
impl<T, E> Result<Option<T>, E> {
  #[inline]
  pub fn transpose(self) -> Option<Result<T, E>> {
    match self {
      Ok(Some(value)) => Some(Ok(value)),
      Ok(None) => None,
      Err(error) => Some(Err(error)),
    }
  }
}
