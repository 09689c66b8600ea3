//! # Workflows Module
//!
//! Top-level entry points for users of the library. A workflow takes an input grid and a
//! validated [`EngineConfig`](crate::engine::config::EngineConfig), selects the execution
//! strategy, and reports phases through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter).
//!
//! - **Diagonal Sums** ([`diagonal_sums`]) - Marks every diagonal run that adds up to the
//!   target sum.

pub mod diagonal_sums;
