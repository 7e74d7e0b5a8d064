use std::any::Any;

use thiserror::Error;

/// Diagnostic carried by the panic of an unwrap-family operation, or of a misused `bind`.
///
/// These operations panic with the [`Display`](std::fmt::Display) representation of this error, so
/// `#[should_panic(expected = ..)]` and panic hooks see a plain message.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum UnwrapError {
  #[error("{message}")]
  Expect { message: String },
  #[error("{message}: {cause}")]
  ExpectWithCause { message: String, cause: String },
  #[error("called `unwrap` on a `None` value")]
  None,
  #[error("called `unwrap` on an `Err` value: {error}")]
  Err { error: String },
  #[error("called `unwrap_err` on an `Ok` value: {value}")]
  Ok { value: String },
  #[error("called `bind` on an absent or failed `{container}` outside of a do block")]
  BindOutsideBlock { container: &'static str },
  #[error("short-circuit of a `{container}` was not claimed by any enclosing do block; the blocks return a different container type")]
  UnclaimedShortCircuit { container: &'static str },
}

impl UnwrapError {
  #[track_caller]
  #[cold]
  pub(crate) fn abort(self) -> ! {
    panic!("{}", self)
  }
}


/// A panic caught at an adapter boundary, normalized into an error value.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("computation panicked: {message}")]
pub struct Panic {
  message: String,
}

impl Panic {
  #[inline]
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }

  /// Normalizes a panic payload. A `Panic` payload is kept as-is, string payloads become the message, and any
  /// other payload gets a generic message.
  pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
    let payload = match payload.downcast::<Panic>() {
      Ok(panic) => return *panic,
      Err(payload) => payload,
    };
    let payload = match payload.downcast::<String>() {
      Ok(message) => return Self::new(*message),
      Err(payload) => payload,
    };
    match payload.downcast_ref::<&'static str>() {
      Some(message) => Self::new(*message),
      None => Self::new("panicked with a non-string payload"),
    }
  }
}


/// Failure of a fallible computation run at an adapter boundary: either the error it returned, or the panic it
/// raised.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum Caught<E> {
  #[error("{0}")]
  Error(E),
  #[error(transparent)]
  Panic(#[from] Panic),
}

impl<E> Caught<E> {
  #[inline]
  pub fn error(self) -> std::option::Option<E> {
    match self {
      Caught::Error(error) => Some(error),
      Caught::Panic(_) => None,
    }
  }
  #[inline]
  pub fn panic(self) -> std::option::Option<Panic> {
    match self {
      Caught::Error(_) => None,
      Caught::Panic(panic) => Some(panic),
    }
  }
}
