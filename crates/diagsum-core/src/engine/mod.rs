//! # Engine Module
//!
//! The diagonal-sum search and its execution model.
//!
//! ## Overview
//!
//! A run allocates one zeroed output buffer, splits the grid's starting rows into
//! contiguous partitions, and scans every starting cell of a partition in both diagonal
//! directions. Cells of any run whose sum hits the target are copied into the buffer.
//! Writes from different workers may land on the same cell, but they always store the
//! same input value, so the buffer needs no locking.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Target sum, worker count, and execution strategy
//! - **Partitioning** ([`partition`]) - Splitting `[0, n)` into per-worker row ranges
//! - **Scanning** ([`scan`]) - The dual-diagonal search with early termination
//! - **Output Buffer** ([`output`]) - Lock-free, idempotent marking of matched cells
//! - **Strategies** ([`threaded`], [`data_parallel`]) - Scoped worker threads and the
//!   data-parallel peer
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks for user feedback

pub mod config;
pub mod data_parallel;
pub(crate) mod output;
pub mod partition;
pub mod progress;
pub(crate) mod scan;
pub mod threaded;
