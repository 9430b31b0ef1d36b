use redirectable::*;
use std::future::{pending, ready};
use tokio::test;

#[test]
async fn tracked_resolves_with_the_drain_outcome() {
    let (executor, tracked) = ExternalExecutor::channel();
    let fut = Redirectable::<&str, &str>::new(pending());
    fut.redirect_with(ready(Ok("v")), executor);
    assert_eq!(tracked.await, Ok(Ok("v")));
}

#[test]
async fn tracked_observes_rejection() {
    let (executor, tracked) = ExternalExecutor::channel();
    let fut = Redirectable::<&str, &str>::new(pending());
    fut.redirect_with(ready(Err("boom")), executor);
    assert_eq!(tracked.await, Ok(Err("boom")));
}

#[test]
async fn constructor_executor_is_drained_by_a_redirect() {
    let (executor, tracked) = ExternalExecutor::channel();
    let fut = Redirectable::with_executor(pending::<Result<&str, &str>>(), executor);
    fut.redirect(ready(Ok("v")));
    assert_eq!(tracked.await, Ok(Ok("v")));
}

#[test]
async fn dropped_executor_reports_dropped() {
    let (executor, tracked) = ExternalExecutor::<&str, &str>::channel();
    drop(executor);
    assert_eq!(tracked.await, Err(Dropped));
}
