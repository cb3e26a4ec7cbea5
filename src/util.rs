// Copyright 2025 Cowboy AI, LLC.

//! Sleep helpers used by the concurrency demonstrations

use std::time::Duration;

/// Block the current thread for the given number of milliseconds.
pub fn sleep_ms(millis: u64) {
    std::thread::sleep(Duration::from_millis(millis));
}

/// Yield to the runtime timer for the given number of milliseconds.
pub async fn sleep_ms_async(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}
