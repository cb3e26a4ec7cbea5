// Copyright 2025 Cowboy AI, LLC.

//! Option handling, map convenience operations, and the closure material,
//! narrated on the console.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_primer::{closures, maps, optionals};
use api_primer::{Address, User};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Options ===");
    let user = User::new(1)
        .name("Clark")
        .job("DEV")
        .address(Address::new().country("China"));

    optionals::when_present(user.name.clone(), |name| println!("✓ name present: {name}"));
    let country = optionals::country_of_user_with_job(Some(user.clone()), "DEV");
    println!("country via projection: {country:?}");
    println!(
        "lazy default: {}",
        optionals::value_or_lazy_default(None, || 123)
    );
    match optionals::require(None::<i32>, "value") {
        Ok(v) => println!("unexpected value: {v}"),
        Err(e) => println!("✗ expected failure: {e}"),
    }

    println!("\n=== Maps ===");
    let mut table = maps::score_table();
    for (key, value) in maps::entries_sorted(&table) {
        println!("key = {key}, value = {value}");
    }
    println!("getOrDefault: {}", maps::score_or_default(&table, "test", 100));
    println!("putIfAbsent e=5: {}", maps::put_if_absent(&mut table, "e", 5));
    println!(
        "computeIfAbsent hello: {}",
        maps::compute_if_absent(&mut table, "hello")
    );
    println!(
        "computeIfPresent a*2: {:?}",
        maps::compute_if_present(&mut table, "a", |old| old * 2)
    );
    println!(
        "merge b+3: {}",
        maps::merge(&mut table, "b", 3, |old, given| old + given)
    );

    println!("\n=== Closures ===");
    println!("inline add: {}", closures::calculate(3, 4, |a, b| a + b));
    println!("fn item add: {}", closures::calculate(3, 4, closures::add));
    println!("method path max: {}", closures::calculate(3, 4, i32::max));
    println!("composed: {}", closures::labeled_double(5));
    println!(
        "magnitudes: {:?}",
        closures::parsed_magnitudes(&["111", "-222", "333"])?
    );
    let mut sink = String::new();
    closures::narrate_and_append(&[1, 2, 3, 4], &mut sink);
    println!("chained consumers appended: {sink}");
    closures::debug_lazily(|| "some debug messages".to_string());

    println!("\n✅ Options and maps demo completed successfully!");
    Ok(())
}
