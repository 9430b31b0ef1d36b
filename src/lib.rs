//! Redirectable futures.
//!
//! A [`Redirectable`] wraps a future and behaves like it, until
//! [`redirect`](Redirectable::redirect) swaps the backing future out.
//! Continuations registered before the swap keep the target they captured;
//! everything registered afterwards observes the new future instead. An
//! [`ExternalExecutor`] lets a separately held future track the container's
//! outcome across redirects.

mod error;
mod ptr;
mod redirectable;

pub use {
    error::Dropped,
    ptr::Ptr,
    redirectable::{ExternalExecutor, Redirectable, Tracked, ValueFuture},
};

/// The bounds required of values and rejection reasons flowing through a
/// [`Redirectable`]. Backing futures are shared so they can be read any
/// number of times, which is where `Clone` and `Sync` come from: every
/// reader holds a handle to the one settled outcome. Rejection reasons that
/// do not implement `Clone` can be wrapped in [`Ptr`].
pub trait Value: 'static + Send + Sync + Clone {}
impl<T> Value for T where T: 'static + Send + Sync + Clone {}
