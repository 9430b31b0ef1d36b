use futures::channel::oneshot;
use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
    task::{Context, Poll},
};

use crate::{Dropped, Value};

/// The completion hooks of a future held elsewhere, queued on a
/// [`Redirectable`](crate::Redirectable) so that the external future tracks
/// the container's outcome across redirects.
///
/// At most one of the two callbacks ever runs, at most once: settling
/// consumes the executor, and a drain removes it from the queue for good.
pub struct ExternalExecutor<T, E> {
    resolve: Box<dyn FnOnce(T) + Send>,
    reject: Box<dyn FnOnce(E) + Send>,
}

impl<T, E> ExternalExecutor<T, E>
where
    T: Value,
    E: Value,
{
    pub fn new(
        resolve: impl FnOnce(T) + Send + 'static,
        reject: impl FnOnce(E) + Send + 'static,
    ) -> Self {
        Self {
            resolve: Box::new(resolve),
            reject: Box::new(reject),
        }
    }

    /// An executor wired to a fresh [`Tracked`] future, the usual way to
    /// chain an externally awaited future to a container.
    pub fn channel() -> (Self, Tracked<T, E>) {
        let (sender, receiver) = oneshot::channel();
        let sender = Arc::new(Mutex::new(Some(sender)));
        let reject_sender = sender.clone();
        let executor = Self::new(
            move |value| {
                if let Some(sender) = sender.lock().unwrap().take() {
                    let _ignore = sender.send(Ok(value));
                }
            },
            move |reason| {
                if let Some(sender) = reject_sender.lock().unwrap().take() {
                    let _ignore = sender.send(Err(reason));
                }
            },
        );
        (executor, Tracked { receiver })
    }

    pub(crate) fn settle(self, outcome: Result<T, E>) {
        match outcome {
            Ok(value) => (self.resolve)(value),
            Err(reason) => (self.reject)(reason),
        }
    }
}

/// The read side of [`ExternalExecutor::channel`]. Resolves with the
/// container outcome a drain delivered to the executor, or with [`Dropped`]
/// if the executor was discarded before any drain reached it.
pub struct Tracked<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Future for Tracked<T, E> {
    type Output = Result<Result<T, E>, Dropped>;
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.map_err(|_| Dropped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_routes_by_outcome() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let resolved = log.clone();
        let rejected = log.clone();
        let executor = ExternalExecutor::new(
            move |value: u32| resolved.lock().unwrap().push(Ok(value)),
            move |reason: &'static str| rejected.lock().unwrap().push(Err(reason)),
        );
        executor.settle(Ok(5));

        let resolved = log.clone();
        let rejected = log.clone();
        let executor = ExternalExecutor::new(
            move |value: u32| resolved.lock().unwrap().push(Ok(value)),
            move |reason: &'static str| rejected.lock().unwrap().push(Err(reason)),
        );
        executor.settle(Err("no"));

        assert_eq!(*log.lock().unwrap(), vec![Ok(5), Err("no")]);
    }
}
