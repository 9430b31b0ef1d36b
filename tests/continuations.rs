use redirectable::*;
use std::future::ready;
use std::sync::{Arc, Mutex};
use tokio::test;

#[test]
async fn then_maps_fulfillment() {
    let fut = Redirectable::<u32, &str>::from_value(20);
    assert_eq!(fut.then(|v| async move { v + 1 }).await, Ok(21));
}

#[test]
async fn then_passes_rejection_through() {
    let fut = Redirectable::<u32, &str>::new(ready(Err("nope")));
    assert_eq!(fut.then(|v| async move { v + 1 }).await, Err("nope"));
}

#[test]
async fn catch_recovers_from_rejection() {
    let fut = Redirectable::<u32, &str>::new(ready(Err("nope")));
    assert_eq!(fut.catch(|_| async { 0 }).await, 0);
}

#[test]
async fn catch_passes_fulfillment_through() {
    let fut = Redirectable::<u32, &str>::from_value(3);
    assert_eq!(fut.catch(|_| async { 0 }).await, 3);
}

#[test]
async fn finally_runs_regardless_of_outcome() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let fut = Redirectable::<u32, &str>::from_value(1);
    let mark = log.clone();
    let outcome = fut.finally(move || mark.lock().unwrap().push("ok")).await;
    assert_eq!(outcome, Ok(1));

    let fut = Redirectable::<u32, &str>::new(ready(Err("no")));
    let mark = log.clone();
    let outcome = fut.finally(move || mark.lock().unwrap().push("err")).await;
    assert_eq!(outcome, Err("no"));

    assert_eq!(*log.lock().unwrap(), vec!["ok", "err"]);
}

#[test]
async fn ptr_carries_a_reason_that_is_not_clone() {
    #[derive(Debug)]
    struct Fatal;

    let reason = Ptr::new(Fatal);
    let fut = Redirectable::<u32, Ptr<Fatal>>::new(ready(Err(reason.clone())));
    assert_eq!(fut.value().await.unwrap_err(), reason);
}
