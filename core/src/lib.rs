//! Optional values and results as plain tagged values, with a full set of combinators, adapters from nullable values
//! and panicking computations, and do blocks that bind values out of containers with early exit.

pub mod option;
pub mod result;
pub mod convert;
pub mod adapt;
pub mod bind;
pub mod error;

pub use option::Option;
pub use result::Result;
pub use bind::{Container, do_block};
#[cfg(feature = "async")]
pub use bind::future::do_async;

#[inline]
pub const fn some<T>(value: T) -> Option<T> { Option::Some(value) }
#[inline]
pub const fn none<T>() -> Option<T> { Option::None }
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> { Result::Ok(value) }
#[inline]
pub const fn err<T, E>(error: E) -> Result<T, E> { Result::Err(error) }

pub mod prelude {
  pub use crate::{err, none, ok, some};
  pub use crate::option::Option;
  pub use crate::result::Result;
  pub use crate::bind::do_block;
  #[cfg(feature = "async")]
  pub use crate::bind::future::do_async;
}
