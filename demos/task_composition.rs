// Copyright 2025 Cowboy AI, LLC.

//! Demonstrates future composition end to end:
//! - creating tasks and already-completed futures
//! - blocking retrieval, with a timeout, and with an immediate default
//! - chaining, failure handling, combining, and racing

use anyhow::Result;
use tokio::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_primer::tasks;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Task Composition ===\n");

    // creation
    let supplied = tasks::supply_value(100).await?;
    println!("✓ supplied value: {supplied}");
    tasks::run_task().await?;
    println!("✓ unit task completed");
    let ready = tasks::completed_value(100).await;
    println!("✓ already-completed value: {ready}");

    // retrieval
    let with_timeout =
        tasks::await_with_timeout(tasks::supply_value(100), Duration::from_secs(2)).await?;
    println!("✓ retrieved within timeout: {with_timeout}");
    let now_or_default = tasks::value_now_or(futures::future::pending::<i32>(), 0);
    println!("✓ immediate retrieval fell back to default: {now_or_default}");

    // chaining
    println!("\n=== Chaining ===");
    println!("√100 = {}", tasks::square_root_of_supplied().await?);
    println!("3 doubled = {}", tasks::doubled_with_combinators().await?);

    // failure handling
    println!("\n=== Failure Handling ===");
    println!("handled to default: {}", tasks::recovered_to_default().await);
    match tasks::observed_outcome().await {
        Ok(value) => println!("unexpected success: {value}"),
        Err(e) => println!("✗ expected failure observed: {e}"),
    }
    println!(
        "recovered on failure: {}",
        tasks::recovered_only_on_failure().await?
    );

    // composition
    println!("\n=== Composition ===");
    println!("sequenced: {}", tasks::sequenced_tasks().await?);
    println!("combined: {}", tasks::combined_tasks().await?);
    println!("all of: {:?}", tasks::all_completed().await?);
    println!("any of (first wins): {}", tasks::first_completed().await?);

    // blocking flavors
    println!("\n=== Blocking Futures ===");
    println!("worker thread said: {}", tasks::worker_thread_value()?);
    println!(
        "blocking pool joined: {}",
        tasks::joined_on_blocking_pool().await?
    );

    println!("\n✅ Task composition demo completed successfully!");
    Ok(())
}
