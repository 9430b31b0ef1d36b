use std::{
    future::{Future, IntoFuture},
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use futures::FutureExt;

use super::shared_state::{SharedOutcome, SharedState};
use super::ExternalExecutor;
use crate::Value;

/// A future handle whose backing computation can be swapped after creation.
///
/// Until the first [`redirect`](Redirectable::redirect) the container is a
/// transparent stand-in for the future it was built from. After a redirect,
/// reads registered from then on observe the new future; reads registered
/// earlier keep the target they captured. Fulfillment and rejection are
/// modeled as `Result<T, E>`, and the container never alters either.
///
/// Handles are cheap to clone and all clones share one slot and one
/// executor queue.
pub struct Redirectable<T, E> {
    state: Arc<SharedState<T, E>>,
}

impl<T, E> Redirectable<T, E>
where
    T: Value,
    E: Value,
{
    /// Wrap `original`. Until the first redirect every read delegates to it
    /// verbatim.
    pub fn new<F>(original: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            state: Arc::new(SharedState::new(original.boxed().shared())),
        }
    }

    /// Like [`new`](Self::new), with `executor` queued from the start.
    ///
    /// No settlement observer is attached to `original`: an executor queued
    /// at construction is satisfied only once some redirected future
    /// settles.
    pub fn with_executor<F>(original: F, executor: ExternalExecutor<T, E>) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let redirectable = Self::new(original);
        redirectable.state.enqueue(executor);
        redirectable
    }

    /// A container that is already fulfilled. This is useful for creating
    /// "mock" containers to pass into consumers.
    pub fn from_value(value: T) -> Self {
        Self::new(std::future::ready(Ok(value)))
    }

    /// Replace the backing future.
    ///
    /// Reads registered from here on observe `next`. The replaced future is
    /// not cancelled; its outcome simply stops being read. Settlement of
    /// `next` is observed from a spawned task, so this must be called within
    /// a Tokio runtime; when `next` settles, every executor queued so far is
    /// drained with its outcome (see [`redirect_with`](Self::redirect_with)).
    pub fn redirect<F>(&self, next: F)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.redirect_inner(next.boxed().shared(), None)
    }

    /// [`redirect`](Self::redirect), additionally queueing `executor`.
    ///
    /// Executors live in one queue for the whole container lifetime, not
    /// one queue per redirect. Whichever observed future settles first
    /// drains the entire queue in enqueue order, so an executor queued here
    /// may be satisfied with the outcome of an earlier redirect's future if
    /// that one settles first.
    pub fn redirect_with<F>(&self, next: F, executor: ExternalExecutor<T, E>)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.redirect_inner(next.boxed().shared(), Some(executor))
    }

    fn redirect_inner(&self, next: SharedOutcome<T, E>, executor: Option<ExternalExecutor<T, E>>) {
        self.state.set_current(next.clone());
        if let Some(executor) = executor {
            self.state.enqueue(executor);
        }
        let state = self.state.clone();
        tokio::spawn(async move {
            let outcome = next.await;
            state.drain(outcome);
        });
    }

    /// A future resolving with the container outcome. The backing future is
    /// captured now: a redirect issued after this call does not retarget the
    /// returned future.
    pub fn value(&self) -> ValueFuture<T, E> {
        ValueFuture {
            inner: self.state.snapshot(),
        }
    }

    /// Run `on_fulfilled` on the fulfillment value; rejection passes
    /// through untouched.
    pub fn then<F, Fut, O>(&self, on_fulfilled: F) -> impl Future<Output = Result<O, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = O>,
    {
        let snapshot = self.value();
        async move {
            match snapshot.await {
                Ok(value) => Ok(on_fulfilled(value).await),
                Err(reason) => Err(reason),
            }
        }
    }

    /// Recover from rejection with `on_rejected`; fulfillment passes
    /// through untouched.
    pub fn catch<F, Fut>(&self, on_rejected: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        let snapshot = self.value();
        async move {
            match snapshot.await {
                Ok(value) => value,
                Err(reason) => on_rejected(reason).await,
            }
        }
    }

    /// Run `on_settled` once the captured target settles, then yield the
    /// untouched outcome.
    pub fn finally<F>(&self, on_settled: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(),
    {
        let snapshot = self.value();
        async move {
            let outcome = snapshot.await;
            on_settled();
            outcome
        }
    }
}

impl<T, E> Clone for Redirectable<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T, E> IntoFuture for Redirectable<T, E>
where
    T: Value,
    E: Value,
{
    type Output = Result<T, E>;
    type IntoFuture = ValueFuture<T, E>;
    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        self.value()
    }
}

impl<T, E> IntoFuture for &'_ Redirectable<T, E>
where
    T: Value,
    E: Value,
{
    type Output = Result<T, E>;
    type IntoFuture = ValueFuture<T, E>;
    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        self.value()
    }
}

/// The await surface of a [`Redirectable`], tied to the backing future in
/// force when it was created.
pub struct ValueFuture<T, E> {
    inner: SharedOutcome<T, E>,
}

impl<T, E> Future for ValueFuture<T, E>
where
    T: Value,
    E: Value,
{
    type Output = Result<T, E>;
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}
