use std::{error::Error, fmt};

/// The error produced by [`Tracked`](crate::Tracked) when its
/// [`ExternalExecutor`](crate::ExternalExecutor) was dropped before any
/// drain reached it. Once this is observed no outcome will ever arrive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Dropped;

impl fmt::Display for Dropped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "executor dropped before it was drained")
    }
}

impl Error for Dropped {}
