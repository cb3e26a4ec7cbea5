// Copyright 2025 Cowboy AI, LLC.

//! # API Primer
//!
//! Worked, asserted examples of the Rust async, time, map, Option, and
//! iterator APIs. Each module is a self-contained set of demonstration
//! functions whose outputs are pinned by test oracles; the `demos/` programs
//! print the same material to the console.
//!
//! - **tasks**: future creation, chaining, combining, racing, and blocking
//!   retrieval with or without a timeout
//! - **datetime**: naive and zoned date/time arithmetic, durations, calendar
//!   spans, and substitutable clocks
//! - **closures**: declaration forms, method references, the `Fn` family,
//!   lazy suppliers, and composition
//! - **maps**: entry-API defaulting, compute, and merge semantics
//! - **optionals**: `Option` creation, inspection, extraction, and chained
//!   projection
//! - **pipelines**: iterator creation, transformation, and reduction, plus
//!   the async-stream flavor
//! - **collectors**: aggregation terminals and a one-pass numeric summary
//!
//! The only shared pieces are the `User`/`Address` fixtures and the sleep
//! helpers; nothing here holds state, touches the network, or persists data.

#![warn(missing_docs)]

pub mod closures;
pub mod collectors;
pub mod datetime;
pub mod domain;
mod errors;
pub mod maps;
pub mod optionals;
pub mod pipelines;
pub mod tasks;
pub mod util;

// Re-export core types
pub use domain::{Address, User};
pub use errors::{PrimerError, PrimerResult};
