mod executor;
mod redirectable;
mod shared_state;

pub use {
    executor::{ExternalExecutor, Tracked},
    redirectable::{Redirectable, ValueFuture},
};
