// Copyright 2025 Cowboy AI, LLC.

//! Iterator pipelines and aggregation over the user fixtures, including the
//! async-stream flavor.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_primer::collectors::{self, SummaryStatistics};
use api_primer::{pipelines, tasks, User};

fn staff() -> Vec<User> {
    vec![
        User::new(1)
            .name("Tom")
            .job("DEV")
            .score(100)
            .hobbies(["reading", "music"]),
        User::new(2)
            .name("Jeff")
            .job("QA")
            .score(200)
            .hobbies(["movies", "ping-pong"]),
        User::new(3)
            .name("Jack")
            .job("DEV")
            .score(300)
            .hobbies(["hiking", "travel"]),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Pipelines ===");
    println!("squares: {:?}", pipelines::squares_as_strings(&[1, 2, 3]));
    println!("above 1: {:?}", pipelines::above(&[1, 2, 3], 1));
    println!("hobbies: {:?}", pipelines::all_hobbies(&staff()));
    println!("distinct: {:?}", pipelines::distinct(&[1, 1, 2, 3, 3]));
    println!("page 3 after 6: {:?}", pipelines::page_of_naturals(6, 3));
    println!(
        "longest first: {:?}",
        pipelines::by_length_desc(&["abcd", "a", "abc", "ab"])
    );
    println!("sum 1..=4: {}", pipelines::sum_with_seed(&[1, 2, 3, 4]));
    println!(
        "peeked and joined: {}",
        pipelines::doubled_squares_joined(&[1, 2, 3, 4])
    );
    println!("powers of two: {:?}", pipelines::powers_of_two(5));
    println!("random digits: {:?}", pipelines::random_digits(10));
    println!("encoded labels: {:?}", pipelines::labels_encoded(&[1, 2]));

    println!("\n=== Collectors ===");
    let by_id = collectors::users_by_id(staff());
    println!("users by id: {}", serde_json::to_string(&by_id)?);
    let (evens, odds) = collectors::partition_even_odd(&[1, 2, 3, 4, 5]);
    println!("evens: {evens:?}, odds: {odds:?}");
    println!("score sums: {:?}", collectors::score_sums_by_job(&staff()));
    println!(
        "joined: {}",
        collectors::joined(&["a", "b", "c", "d"], "|")
    );
    let stats: SummaryStatistics = (1i64..=4).collect();
    println!("summary: {stats:?} (mean {:?})", stats.mean());

    println!("\n=== Concurrent Flavors ===");
    println!(
        "async stream squares: {:?}",
        pipelines::squares_as_strings_streamed(vec![1, 2, 3]).await
    );
    println!(
        "blocking pool joined: {}",
        tasks::joined_on_blocking_pool().await?
    );

    println!("\n✅ Pipeline demo completed successfully!");
    Ok(())
}
