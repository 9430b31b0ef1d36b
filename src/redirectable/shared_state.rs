use std::{collections::VecDeque, sync::Mutex};

use futures::future::{BoxFuture, Shared};

use super::ExternalExecutor;
use crate::Value;

/// A backing future in a form that can be read any number of times.
pub type SharedOutcome<T, E> = Shared<BoxFuture<'static, Result<T, E>>>;

pub struct SharedState<T, E> {
    // Two independent locks: the slot changes on redirect, the queue on
    // enqueue and drain. Neither is held while user code runs.
    slot: Mutex<Slot<T, E>>,
    pending: Mutex<VecDeque<ExternalExecutor<T, E>>>,
}

struct Slot<T, E> {
    original: SharedOutcome<T, E>,
    // None until the first redirect. Only ever replaced, never cleared.
    current: Option<SharedOutcome<T, E>>,
}

impl<T, E> SharedState<T, E>
where
    T: Value,
    E: Value,
{
    pub fn new(original: SharedOutcome<T, E>) -> Self {
        Self {
            slot: Mutex::new(Slot {
                original,
                current: None,
            }),
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// The future a read registered right now runs against.
    pub fn snapshot(&self) -> SharedOutcome<T, E> {
        let slot = self.slot.lock().unwrap();
        slot.current.as_ref().unwrap_or(&slot.original).clone()
    }

    pub fn set_current(&self, next: SharedOutcome<T, E>) {
        self.slot.lock().unwrap().current = Some(next);
    }

    pub fn enqueue(&self, executor: ExternalExecutor<T, E>) {
        self.pending.lock().unwrap().push_back(executor);
    }

    /// Settle every queued executor with `outcome`, oldest first, until the
    /// queue is empty. Entries are popped one at a time and settled with the
    /// lock released, so a callback may re-enter the container.
    pub fn drain(&self, outcome: Result<T, E>) {
        loop {
            let executor = self.pending.lock().unwrap().pop_front();
            match executor {
                Some(executor) => executor.settle(outcome.clone()),
                None => break,
            }
        }
    }
}
