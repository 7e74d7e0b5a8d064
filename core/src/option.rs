//! Optional values: a value is either present ([`Some`]) or absent ([`None`]).
//!
//! Presence is decided by the tag alone. Values that other languages consider "falsy", such as `0`, `""`, or
//! `f64::NAN`, are ordinary present values.

use std::iter::FusedIterator;

pub use self::Option::{None, Some};

use crate::error::UnwrapError;
use crate::result::Result::{self, Err, Ok};

/// An optional value. The tag is fixed at construction; every combinator returns a new instance.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[must_use = "this `Option` may be `None`, which should be handled"]
pub enum Option<T> {
  None,
  Some(T),
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { None }
}

impl<T> Option<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  /// Returns `true` if this is `Some` and `predicate` holds for the value. `predicate` is not called on `None`.
  #[inline]
  pub fn is_some_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Some(value) => predicate(value),
      None => false,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Some(value) => Some(value),
      None => None,
    }
  }


  /// Returns the value, panicking with `message` if this is `None`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Some(value) => value,
      None => UnwrapError::Expect { message: message.to_owned() }.abort(),
    }
  }

  /// Returns the value, panicking if this is `None`.
  ///
  /// Prefer [`unwrap_or`](Self::unwrap_or), [`match_with`](Self::match_with), or a do block.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Some(value) => value,
      None => UnwrapError::None.abort(),
    }
  }
  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Some(value) => value,
      None => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Some(value) => value,
      None => default(),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(T::default)
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Some(value) => Some(f(value)),
      None => None,
    }
  }
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Some(value) => f(value),
      None => default,
    }
  }
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Some(value) => f(value),
      None => default(),
    }
  }


  #[inline]
  pub fn ok_or<E>(self, error: E) -> Result<T, E> {
    match self {
      Some(value) => Ok(value),
      None => Err(error),
    }
  }
  #[inline]
  pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Some(value) => Ok(value),
      None => Err(error()),
    }
  }


  /// Returns `other` if this is `Some`, otherwise `None`.
  #[inline]
  pub fn and<U>(self, other: Option<U>) -> Option<U> {
    match self {
      Some(_) => other,
      None => None,
    }
  }
  /// Returns `self` if it is `Some`, otherwise `other`.
  #[inline]
  pub fn or(self, other: Option<T>) -> Option<T> {
    match self {
      Some(value) => Some(value),
      None => other,
    }
  }
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Option<T>) -> Option<T> {
    match self {
      Some(value) => Some(value),
      None => f(),
    }
  }
  /// Returns the one present value if exactly one of `self` and `other` is `Some`.
  #[inline]
  pub fn xor(self, other: Option<T>) -> Option<T> {
    match (self, other) {
      (Some(value), None) | (None, Some(value)) => Some(value),
      _ => None,
    }
  }

  /// Chains a computation that may itself produce no value. Alias of [`and_then`](Self::and_then).
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Some(value) => f(value),
      None => None,
    }
  }
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> { self.flat_map(f) }

  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
    match self {
      Some(value) if predicate(&value) => Some(value),
      _ => None,
    }
  }

  #[inline]
  pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
    match (self, other) {
      (Some(a), Some(b)) => Some((a, b)),
      _ => None,
    }
  }


  /// Calls `f` on the value for its side effect and returns what `f` returned, or `None` without calling `f` if
  /// there is no value. The receiver is borrowed and never changes.
  #[inline]
  pub fn tap<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
    match self {
      Some(value) => Some(f(value)),
      None => None,
    }
  }
  /// Calls `f` on the value for its side effect and returns `self` unchanged.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Some(value) = &self {
      f(value);
    }
    self
  }

  /// Exhaustive dispatch: returns `some(value)` or `none()`.
  #[inline]
  pub fn match_with<U>(self, some: impl FnOnce(T) -> U, none: impl FnOnce() -> U) -> U {
    match self {
      Some(value) => some(value),
      None => none(),
    }
  }


  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    self.as_ref().into_iter()
  }
}

impl<T> Option<Option<T>> {
  #[inline]
  pub fn flatten(self) -> Option<T> { self.flat_map(|inner| inner) }
}


/// Iterator over the value of an [`Option`], yielding it at most once.
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

/// Borrowing iterator over the value of an [`Option`].
pub type Iter<'a, T> = IntoIter<&'a T>;

impl<T> IntoIterator for Option<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> IntoIter<T> { IntoIter(self.into_std().into_iter()) }
}
impl<'a, T> IntoIterator for &'a Option<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> { self.iter() }
}


#[cfg(test)]
mod test {
  use std::cell::Cell;

  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn tag_queries() {
    let some = Some(0);
    let none: Option<i32> = None;
    assert!(some.is_some() && !some.is_none());
    assert!(none.is_none() && !none.is_some());
    assert!(some.is_some_and(|v| *v == 0));
    assert!(!some.is_some_and(|v| *v == 1));
  }

  #[test]
  fn is_some_and_skips_predicate_on_none() {
    let called = Cell::new(false);
    let none: Option<i32> = None;
    assert!(!none.is_some_and(|_| {
      called.set(true);
      true
    }));
    assert!(!called.get());
  }

  #[test]
  fn unwrap_family() {
    assert_eq!(Some("").unwrap(), "");
    assert_eq!(Some(3).expect("present"), 3);
    assert_eq!(None.unwrap_or(7), 7);
    assert_eq!(Some(1).unwrap_or(7), 1);
    assert_eq!(None::<String>.unwrap_or_default(), "");
  }

  #[test]
  #[should_panic(expected = "called `unwrap` on a `None` value")]
  fn unwrap_on_none_panics() {
    None::<u8>.unwrap();
  }

  #[test]
  #[should_panic(expected = "the answer must be known")]
  fn expect_on_none_panics_with_message() {
    None::<u8>.expect("the answer must be known");
  }

  #[test]
  fn unwrap_or_else_is_lazy() {
    let calls = Cell::new(0);
    let default = || {
      calls.set(calls.get() + 1);
      9
    };
    assert_eq!(Some(1).unwrap_or_else(default), 1);
    assert_eq!(calls.get(), 0);
    assert_eq!(None.unwrap_or_else(default), 9);
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn ok_or_else_is_lazy() {
    let calls = Cell::new(0);
    let error = || {
      calls.set(calls.get() + 1);
      "missing"
    };
    assert_eq!(Some(1).ok_or_else(error), Ok(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(None::<i32>.ok_or_else(error), Err("missing"));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn mapping() {
    assert_eq!(Some(2).map(|v| v * 10), Some(20));
    assert_eq!(None::<i32>.map(|v| v * 10), None);
    assert_eq!(Some(2).map_or(0, |v| v + 1), 3);
    assert_eq!(None.map_or(0, |v: i32| v + 1), 0);
    assert_eq!(Some(2).map_or_else(|| -1, |v| v + 1), 3);
    assert_eq!(None.map_or_else(|| -1, |v: i32| v + 1), -1);
  }

  #[test]
  fn and_or_short_circuit() {
    assert!(None::<i32>.and(Some(1)).is_none());
    assert_eq!(Some(1).and(Some(2)).unwrap(), 2);
    assert_eq!(Some(1).or(Some(2)).unwrap(), 1);
    assert_eq!(None.or(Some(2)).unwrap(), 2);
    assert_eq!(Some(1).or_else(|| unreachable!()), Some(1));
    assert_eq!(None.or_else(|| Some(5)), Some(5));
    assert_eq!(Some(1).xor(None), Some(1));
    assert_eq!(Some(1).xor(Some(2)), None);
  }

  #[test]
  fn chaining() {
    let half = |v: i32| if v % 2 == 0 { Some(v / 2) } else { None };
    assert_eq!(Some(8).flat_map(half).and_then(half), Some(2));
    assert_eq!(Some(6).flat_map(half).and_then(half), None);
    assert_eq!(Some(Some(1)).flatten(), Some(1));
    assert_eq!(Some(1).zip(Some("a")), Some((1, "a")));
    assert_eq!(Some(1).zip(None::<u8>), None);
  }

  #[test]
  fn filter_keeps_matching_values() {
    assert_eq!(Some(4).filter(|v| *v > 3), Some(4));
    assert_eq!(Some(2).filter(|v| *v > 3), None);
    assert_eq!(None.filter(|v: &i32| *v > 3), None);
  }

  #[test]
  fn tap_returns_callback_result_and_keeps_receiver() {
    let option = Some(String::from("value"));
    assert_eq!(option.tap(|v| v.len()), Some(5));
    assert_eq!(option, Some(String::from("value")));

    let calls = Cell::new(0);
    let none: Option<String> = None;
    assert_eq!(none.tap(|_| calls.set(1)), None);
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn inspect_returns_self() {
    let seen = Cell::new(0);
    assert_eq!(Some(3).inspect(|v| seen.set(*v)), Some(3));
    assert_eq!(seen.get(), 3);
  }

  #[test]
  fn match_with_dispatches() {
    assert_eq!(Some(2).match_with(|v| v * 2, || 0), 4);
    assert_eq!(None.match_with(|v: i32| v * 2, || 0), 0);
  }

  #[test]
  fn iterates_at_most_once() {
    assert_eq!(Some(1).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(None::<i32>.iter().count(), 0);
    let option = Some(2);
    let sum: i32 = (&option).into_iter().sum();
    assert_eq!(sum, 2);
  }

  #[test]
  fn none_orders_before_some() {
    assert!(None < Some(0));
    assert_eq!(Option::<u8>::default(), None);
  }
}
