// Copyright 2025 Cowboy AI, LLC.

//! Map convenience operations via the `HashMap` entry API.
//!
//! Each function is the entry-API form of a defaulting/compute/merge idiom,
//! paired in the tests with its long-hand `get`/`insert` equivalent so the
//! two can be compared.

use std::collections::HashMap;

/// The shared score-table fixture: {a: 1, b: 2, c: 3, d: 4}.
pub fn score_table() -> HashMap<String, i32> {
    [("a", 1), ("b", 2), ("c", 3), ("d", 4)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Entries sorted by key, for deterministic console output.
pub fn entries_sorted(map: &HashMap<String, i32>) -> Vec<(String, i32)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Look a key up, falling back to `default` when it is absent.
pub fn score_or_default(map: &HashMap<String, i32>, key: &str, default: i32) -> i32 {
    map.get(key).copied().unwrap_or(default)
}

/// Insert `value` only when `key` is vacant; returns the value left in the map.
pub fn put_if_absent(map: &mut HashMap<String, i32>, key: &str, value: i32) -> i32 {
    *map.entry(key.to_string()).or_insert(value)
}

/// When `key` is vacant, compute a value from the key itself (its length),
/// insert it, and return it. An occupied key is left untouched.
pub fn compute_if_absent(map: &mut HashMap<String, i32>, key: &str) -> i32 {
    *map.entry(key.to_string())
        .or_insert_with(|| key.len() as i32)
}

/// When `key` is occupied, replace its value with a recomputed one and return
/// it. A vacant key stays vacant and yields `None`.
pub fn compute_if_present(
    map: &mut HashMap<String, i32>,
    key: &str,
    recompute: impl FnOnce(i32) -> i32,
) -> Option<i32> {
    let value = map.get_mut(key)?;
    *value = recompute(*value);
    Some(*value)
}

/// Merge `value` into the slot for `key`: an occupied slot is combined with
/// the old value via `combine`, a vacant slot takes `value` directly. Returns
/// the value left in the map.
pub fn merge(
    map: &mut HashMap<String, i32>,
    key: &str,
    value: i32,
    combine: impl FnOnce(i32, i32) -> i32,
) -> i32 {
    *map.entry(key.to_string())
        .and_modify(|old| *old = combine(*old, value))
        .or_insert(value)
}
