// Copyright 2025 Cowboy AI, LLC.

//! Aggregation terminals: collecting into containers, partitioning,
//! grouping, and numeric summaries.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::domain::User;

/// Collect users into a map keyed by id.
pub fn users_by_id(users: Vec<User>) -> HashMap<u32, User> {
    users.into_iter().map(|user| (user.id, user)).collect()
}

/// Collect into a deque, the pick-your-own-container form.
pub fn to_deque(values: &[i32]) -> VecDeque<i32> {
    values.iter().copied().collect()
}

/// The supplier/accumulator form: fold values into a freshly built set.
pub fn folded_set(values: &[i32]) -> HashSet<i32> {
    values.iter().fold(HashSet::new(), |mut set, value| {
        set.insert(*value);
        set
    })
}

/// Split values into (evens, odds).
pub fn partition_even_odd(values: &[i32]) -> (Vec<i32>, Vec<i32>) {
    values.iter().copied().partition(|i| i % 2 == 0)
}

/// Group users by job title. Users with no job title are skipped.
pub fn users_by_job(users: Vec<User>) -> HashMap<String, Vec<User>> {
    let mut groups: HashMap<String, Vec<User>> = HashMap::new();
    for user in users {
        let Some(job) = user.job.clone() else { continue };
        groups.entry(job).or_default().push(user);
    }
    groups
}

/// Group user names into a set per job title.
pub fn names_by_job(users: &[User]) -> HashMap<String, HashSet<String>> {
    let mut groups: HashMap<String, HashSet<String>> = HashMap::new();
    for user in users {
        if let (Some(job), Some(name)) = (&user.job, &user.name) {
            groups.entry(job.clone()).or_default().insert(name.clone());
        }
    }
    groups
}

/// Sum scores per job title, missing scores counting as zero.
pub fn score_sums_by_job(users: &[User]) -> HashMap<String, i64> {
    let mut sums: HashMap<String, i64> = HashMap::new();
    for user in users {
        if let Some(job) = &user.job {
            *sums.entry(job.clone()).or_insert(0) += user.score.unwrap_or(0);
        }
    }
    sums
}

/// Arithmetic mean, absent for an empty input.
pub fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().map(|i| *i as i64).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Join words with a separator.
pub fn joined(words: &[&str], separator: &str) -> String {
    words.join(separator)
}

/// One-pass numeric summary: count, sum, min, max, mean.
///
/// Collect any `i64` iterator into it:
///
/// ```
/// use api_primer::collectors::SummaryStatistics;
///
/// let stats: SummaryStatistics = (1i64..=4).collect();
/// assert_eq!(stats.sum(), 10);
/// assert_eq!(stats.mean(), Some(2.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStatistics {
    count: u64,
    sum: i64,
    min: Option<i64>,
    max: Option<i64>,
}

impl SummaryStatistics {
    /// An empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the summary
    pub fn record(&mut self, value: i64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Number of recorded values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of recorded values
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Smallest recorded value, absent when empty
    pub fn min(&self) -> Option<i64> {
        self.min
    }

    /// Largest recorded value, absent when empty
    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// Arithmetic mean, absent when empty
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

impl Extend<i64> for SummaryStatistics {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for value in iter {
            self.record(value);
        }
    }
}

impl FromIterator<i64> for SummaryStatistics {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
