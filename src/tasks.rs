// Copyright 2025 Cowboy AI, LLC.

//! Asynchronous future composition: creating tasks, retrieving their values
//! (blocking, with timeout, or immediately with a default), chaining
//! transforms, handling failures, and combining several tasks.
//!
//! Everything here drives the runtime's own primitives; the demonstrations
//! add no scheduling policy of their own.

use std::future::Future;

use futures::future::{join_all, select_all};
use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{timeout, Duration};

use crate::errors::{PrimerError, PrimerResult};

/// Spawn a task that produces a value.
pub fn supply_value(value: i32) -> JoinHandle<i32> {
    tokio::spawn(async move { value })
}

/// Spawn a task that produces nothing, only a side effect.
pub fn run_task() -> JoinHandle<()> {
    tokio::spawn(async { tracing::info!("task complete") })
}

/// A future that is already complete.
pub fn completed_value(value: i32) -> futures::future::Ready<i32> {
    futures::future::ready(value)
}

/// Await a task's value, giving up after `wait`.
pub async fn await_with_timeout<T>(handle: JoinHandle<T>, wait: Duration) -> PrimerResult<T> {
    Ok(timeout(wait, handle).await??)
}

/// Take a future's value if it is ready right now, else the default.
pub fn value_now_or<F: Future>(future: F, default: F::Output) -> F::Output {
    future.now_or_never().unwrap_or(default)
}

/// Supply 100 on a task, transform it to its square root, consume the result.
pub async fn square_root_of_supplied() -> PrimerResult<f64> {
    let value = tokio::spawn(async { 100_i32 }).await?;
    let root = f64::from(value).sqrt();
    tracing::info!(root, "chained transform complete");
    Ok(root)
}

/// The combinator spelling of a chain: transform the joined value, observe
/// it, and run a follow-up step once it lands.
pub async fn doubled_with_combinators() -> PrimerResult<i32> {
    tokio::spawn(async { 3 })
        .map(|joined| joined.map(|v| v * 2).map_err(PrimerError::from))
        .inspect(|result| {
            if let Ok(value) = result {
                tracing::info!(value, "task complete");
            }
        })
        .await
}

/// A task whose computation always fails.
async fn failing_task() -> PrimerResult<i32> {
    Err(PrimerError::TaskFailed("an exception".to_string()))
}

fn flatten_join<T>(joined: Result<PrimerResult<T>, JoinError>) -> PrimerResult<T> {
    joined.map_err(PrimerError::from)?
}

/// Handle-style recovery: map either outcome to a value, failures to 0.
pub async fn recovered_to_default() -> i32 {
    flatten_join(tokio::spawn(failing_task()).await).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "recovered with default");
        0
    })
}

/// Observation only: log whichever way the task went, pass the outcome on
/// unchanged.
pub async fn observed_outcome() -> PrimerResult<i32> {
    flatten_join(tokio::spawn(failing_task()).await)
        .inspect(|value| tracing::info!(value, "result"))
        .inspect_err(|err| tracing::warn!(error = %err, "task failed"))
}

/// Recovery that applies only on failure; a success passes through untouched.
pub async fn recovered_only_on_failure() -> PrimerResult<i32> {
    flatten_join(tokio::spawn(failing_task()).await).or_else(|err| {
        tracing::warn!(error = %err, "substituting default");
        Ok(0)
    })
}

/// Sequence a second task on the first one's output: 100, then +200.
pub async fn sequenced_tasks() -> PrimerResult<i32> {
    let first = tokio::spawn(async { 100 }).await?;
    let second = tokio::spawn(async move { first + 200 }).await?;
    Ok(second)
}

/// Combine two independent tasks once both are done: 100 + 200.
pub async fn combined_tasks() -> PrimerResult<i32> {
    let (a, b) = tokio::try_join!(
        tokio::spawn(async { 100 }),
        tokio::spawn(async { 200 })
    )?;
    Ok(a + b)
}

/// Wait for a whole set of tasks and keep every value, in spawn order.
pub async fn all_completed() -> PrimerResult<Vec<i32>> {
    let handles = vec![
        supply_value(100),
        supply_value(200),
        supply_value(300),
    ];
    join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.map_err(PrimerError::from))
        .collect()
}

/// Race a set of tasks and keep the first value to land; the laggards are
/// cancelled.
pub async fn first_completed() -> PrimerResult<i32> {
    let handles = vec![
        tokio::spawn(async {
            crate::util::sleep_ms_async(50).await;
            100
        }),
        tokio::spawn(async { 200 }),
        tokio::spawn(async {
            crate::util::sleep_ms_async(50).await;
            300
        }),
    ];
    let (first, _index, laggards) = select_all(handles).await;
    for handle in laggards {
        handle.abort();
    }
    Ok(first?)
}

/// The basic blocking future: a plain worker thread delivers a value through
/// a oneshot channel and the caller blocks on it.
pub fn worker_thread_value() -> PrimerResult<String> {
    let (sender, receiver) = futures::channel::oneshot::channel();
    std::thread::spawn(move || {
        tracing::info!("task is running");
        crate::util::sleep_ms(20);
        let _ = sender.send("the result".to_string());
        tracing::info!("task completed");
    });
    Ok(futures::executor::block_on(receiver)?)
}

/// Offload a pipeline to the blocking pool and await the joined digits.
pub async fn joined_on_blocking_pool() -> PrimerResult<String> {
    let handle = tokio::task::spawn_blocking(|| {
        [1, 2, 3, 4].iter().map(ToString::to_string).collect::<String>()
    });
    Ok(handle.await?)
}
