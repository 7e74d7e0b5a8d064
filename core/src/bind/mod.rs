//! Do blocks: sequential code that extracts values from containers with [`bind`](Option::bind), aborting the whole
//! block at the first absent or failed container.
//!
//! ```
//! use fallible_core::prelude::*;
//!
//! let mut effects = Vec::new();
//! let sum = do_block(|| {
//!   let a = some(1).bind();
//!   let b = none::<i32>().bind();
//!   effects.push("unreachable");
//!   some(a + b)
//! });
//! assert!(sum.is_none());
//! assert!(effects.is_empty());
//! ```
//!
//! A block behaves exactly like the equivalent chain of `and_then` calls. An absent or failed `bind` unwinds to the
//! innermost enclosing block with a private tagged payload, which the block turns back into `None` or `Err(e)`.
//! The unwind uses [`resume_unwind`](std::panic::resume_unwind), so no panic hook runs for it. Genuine panics raised
//! inside a block pass through unchanged. Blocks therefore require `panic = "unwind"`.
//!
//! While a short-circuit unwinds, [`std::thread::panicking`] returns `true`, which the equivalent `and_then` chain
//! never does. A [`MutexGuard`](std::sync::MutexGuard) held across a failing `bind` poisons its mutex, `Drop` impls
//! that check `panicking()` take their unwinding path, and a `Drop` that panics during a short-circuit aborts the
//! process. Release guards before binding, or bind into a local and drop the guard first.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use crate::error::UnwrapError;
use crate::option::Option;
use crate::result::Result;

#[cfg(feature = "async")]
pub mod future;

/// A container that can short-circuit a do block: either it holds a value, or a residual that ends the block.
pub trait Container: Sized {
  type Value;
  /// What an absent or failed container carries into the result of the block.
  type Residual: Send + 'static;

  /// Name used in diagnostics.
  const NAME: &'static str;

  fn branch(self) -> std::result::Result<Self::Value, Self::Residual>;

  fn from_residual(residual: Self::Residual) -> Self;
}

/// Residual of an absent [`Option`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Absent;

impl<T> Container for Option<T> {
  type Value = T;
  type Residual = Absent;

  const NAME: &'static str = "Option";

  #[inline]
  fn branch(self) -> std::result::Result<T, Absent> {
    self.into_std().ok_or(Absent)
  }
  #[inline]
  fn from_residual(_: Absent) -> Self { Option::None }
}

impl<T, E: Send + 'static> Container for Result<T, E> {
  type Value = T;
  type Residual = E;

  const NAME: &'static str = "Result";

  #[inline]
  fn branch(self) -> std::result::Result<T, E> { self.into_std() }
  #[inline]
  fn from_residual(error: E) -> Self { Result::Err(error) }
}


impl<T> Option<T> {
  /// Returns the value, or ends the enclosing do block with `None`.
  ///
  /// # Panics
  ///
  /// Panics if this is `None` and no do block is active on the current thread. Inside a block, the short-circuit
  /// unwinds like a panic: `std::thread::panicking()` is `true` for destructors it runs, and mutex guards it drops
  /// poison their mutex.
  #[inline]
  #[track_caller]
  pub fn bind(self) -> T { extract(self) }
}

impl<T, E: Send + 'static> Result<T, E> {
  /// Returns the value, or ends the enclosing do block with this error.
  ///
  /// # Panics
  ///
  /// Panics if this is `Err` and no do block is active on the current thread. Inside a block, the short-circuit
  /// unwinds like a panic: `std::thread::panicking()` is `true` for destructors it runs, and mutex guards it drops
  /// poison their mutex.
  #[inline]
  #[track_caller]
  pub fn bind(self) -> T { extract(self) }
}


/// Runs `block`, returning its container, or the first absent/failed container it [bound](Option::bind).
pub fn do_block<C: Container>(block: impl FnOnce() -> C) -> C {
  let outcome = {
    let _scope = Scope::enter();
    panic::catch_unwind(AssertUnwindSafe(block))
  };
  match outcome {
    Ok(container) => container,
    Err(payload) => recover(payload),
  }
}


/// Unwind payload of a short-circuiting `bind`.
struct ShortCircuit {
  container: &'static str,
  residual: Box<dyn Any + Send>,
}

thread_local! {
  static ACTIVE_BLOCKS: Cell<usize> = const { Cell::new(0) };
}

/// Marks a do block as active on the current thread until dropped.
struct Scope(());

impl Scope {
  #[inline]
  fn enter() -> Self {
    ACTIVE_BLOCKS.with(|active| active.set(active.get() + 1));
    Self(())
  }

  #[inline]
  fn is_active() -> bool {
    ACTIVE_BLOCKS.with(|active| active.get() > 0)
  }
}

impl Drop for Scope {
  #[inline]
  fn drop(&mut self) {
    ACTIVE_BLOCKS.with(|active| active.set(active.get() - 1));
  }
}

#[track_caller]
fn extract<C: Container>(container: C) -> C::Value {
  match container.branch() {
    Ok(value) => value,
    Err(residual) => {
      if !Scope::is_active() {
        UnwrapError::BindOutsideBlock { container: C::NAME }.abort()
      }
      panic::resume_unwind(Box::new(ShortCircuit { container: C::NAME, residual: Box::new(residual) }))
    }
  }
}

/// Turns an unwind caught by a do block back into a container. Must be called after the block's scope was left.
fn recover<C: Container>(payload: Box<dyn Any + Send>) -> C {
  let short_circuit = match payload.downcast::<ShortCircuit>() {
    Ok(short_circuit) => *short_circuit,
    Err(payload) => {
      #[cfg(feature = "tracing")]
      tracing::debug!(container = C::NAME, "do block panicked; resuming the panic");
      panic::resume_unwind(payload)
    }
  };
  let ShortCircuit { container, residual } = short_circuit;
  match residual.downcast::<C::Residual>() {
    Ok(residual) => {
      #[cfg(feature = "tracing")]
      tracing::trace!(container = container, "do block short-circuited");
      C::from_residual(*residual)
    }
    Err(residual) => {
      if !Scope::is_active() {
        UnwrapError::UnclaimedShortCircuit { container }.abort()
      }
      #[cfg(feature = "tracing")]
      tracing::trace!(container = container, block = C::NAME, "short-circuit belongs to an outer do block; passing it on");
      panic::resume_unwind(Box::new(ShortCircuit { container, residual }))
    }
  }
}

/// Returns `true` if `payload` is the unwind of a short-circuiting `bind`, which only do blocks may catch.
#[inline]
pub(crate) fn is_short_circuit(payload: &(dyn Any + Send)) -> bool {
  payload.is::<ShortCircuit>()
}
