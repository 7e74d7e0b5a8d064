use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::task::Poll;

use futures::future::{self, FutureExt};

use super::{Container, recover, Scope};

/// Asynchronous [`do_block`](super::do_block): resolves to the container `block` resolves to, or to the first
/// absent/failed container bound while polling it.
///
/// The block counts as an active do block only while it is being polled, so `bind` works anywhere inside the
/// `async` block, including after `.await` points.
///
/// ```
/// use fallible_core::prelude::*;
///
/// async fn lookup(id: u32) -> Option<&'static str> {
///   if id == 1 { some("one") } else { none() }
/// }
///
/// let names = futures::executor::block_on(do_async(async {
///   let first = lookup(1).await.bind();
///   let second = lookup(2).await.bind();
///   some(format!("{} {}", first, second))
/// }));
/// assert!(names.is_none());
/// ```
pub fn do_async<C, F>(block: F) -> impl Future<Output=C> where
  F: Future<Output=C>,
  C: Container,
{
  let mut block = Box::pin(AssertUnwindSafe(block).catch_unwind());
  future::poll_fn(move |cx| {
    let outcome = {
      let _scope = Scope::enter();
      block.as_mut().poll(cx)
    };
    match outcome {
      Poll::Ready(Ok(container)) => Poll::Ready(container),
      Poll::Ready(Err(payload)) => Poll::Ready(recover(payload)),
      Poll::Pending => Poll::Pending,
    }
  })
}
