// Copyright 2025 Cowboy AI, LLC.

//! Iterator pipeline processing: creation, transformation, matching,
//! deduplication, pagination, sorting, reduction, and the async-stream
//! flavor of the same material.
//!
//! Aggregation terminals (collect-to-map, grouping, statistics) live in
//! [`crate::collectors`].

use std::collections::HashSet;
use std::hash::Hash;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::Rng;
use tokio_stream::StreamExt;

use crate::domain::User;
use crate::errors::{PrimerError, PrimerResult};

/// Square each value and render it: `[1, 2, 3]` → `["1", "4", "9"]`.
pub fn squares_as_strings(values: &[i32]) -> Vec<String> {
    values
        .iter()
        .map(|i| i * i)
        .map(|i| i.to_string())
        .collect()
}

/// Keep only the values above the threshold.
pub fn above(values: &[i32], threshold: i32) -> Vec<i32> {
    values.iter().copied().filter(|i| *i > threshold).collect()
}

/// Flatten every user's hobby list into one order-preserving list.
pub fn all_hobbies(users: &[User]) -> Vec<String> {
    users
        .iter()
        .flat_map(|user| user.hobbies.iter().cloned())
        .collect()
}

/// Drop repeated elements, keeping first occurrences in order.
pub fn distinct<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// One page of the natural numbers: skip `skip`, take `take`.
pub fn page_of_naturals(skip: usize, take: usize) -> Vec<u64> {
    (1..).skip(skip).take(take).collect()
}

/// Sort words by length, longest first.
pub fn by_length_desc(words: &[&str]) -> Vec<String> {
    let mut sorted: Vec<String> = words.iter().map(|s| s.to_string()).collect();
    sorted.sort_by_key(|s| std::cmp::Reverse(s.len()));
    sorted
}

/// Sum with an explicit zero seed (fold).
pub fn sum_with_seed(values: &[i32]) -> i32 {
    values.iter().fold(0, |acc, i| acc + i)
}

/// Sum without a seed: `reduce` yields an `Option`, absent for an empty input.
pub fn sum_or_zero(values: &[i32]) -> i32 {
    values.iter().copied().reduce(|a, b| a + b).unwrap_or(0)
}

/// Square, peek at the intermediate values, double, and join with commas.
pub fn doubled_squares_joined(values: &[i32]) -> String {
    values
        .iter()
        .map(|i| i * i)
        .inspect(|squared| tracing::debug!(squared, "mid-pipeline"))
        .map(|i| i * 2)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// The first `count` powers of two, as an iterated infinite sequence cut off
/// with `take`.
pub fn powers_of_two(count: usize) -> Vec<u64> {
    std::iter::successors(Some(1u64), |prev| prev.checked_mul(2))
        .take(count)
        .collect()
}

/// `count` random digits from a generated infinite sequence.
pub fn random_digits(count: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    std::iter::repeat_with(|| rng.gen_range(0..10u8))
        .take(count)
        .collect()
}

/// Double a value, label it, and base64-encode the label.
///
/// Named helper extracted from what would otherwise be a multi-line closure
/// in the middle of a pipeline; see [`labels_encoded`] for the call site.
pub fn label_and_encode(value: i32) -> String {
    let doubled = value * 2;
    let label = format!("The double value is: {doubled}");
    STANDARD.encode(label)
}

/// Encode every value via the named helper instead of an inline block.
pub fn labels_encoded(values: &[i32]) -> Vec<String> {
    values.iter().copied().map(label_and_encode).collect()
}

/// Render a possibly-absent list, treating absence as empty.
pub fn stringified_or_empty(values: Option<Vec<i32>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|i| i.to_string())
        .collect()
}

/// Halve every value, failing the whole pipeline on the first odd element.
pub fn halved_exactly(values: &[i32]) -> PrimerResult<Vec<i32>> {
    values
        .iter()
        .map(|i| {
            if i % 2 == 0 {
                Ok(i / 2)
            } else {
                Err(PrimerError::InvalidOperation {
                    reason: format!("expected an even value, got {i}"),
                })
            }
        })
        .collect()
}

/// [`squares_as_strings`] expressed over an async stream.
pub async fn squares_as_strings_streamed(values: Vec<i32>) -> Vec<String> {
    tokio_stream::iter(values)
        .map(|i| i * i)
        .map(|i| i.to_string())
        .collect()
        .await
}
