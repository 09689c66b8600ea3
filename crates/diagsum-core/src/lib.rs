//! # Diagsum Core Library
//!
//! Finds every contiguous diagonal run of digits in a square grid whose sum equals a
//! target value, and produces a grid holding only the cells that belong to such a run.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** The [`Grid`](core::grid::Grid) data container and the
//!   text codec used to read and write it.
//!
//! - **[`engine`]: The Logic Core.** Row partitioning, the dual-diagonal scan, the shared
//!   output buffer, and the two execution strategies (scoped worker threads and a
//!   data-parallel peer).
//!
//! - **[`workflows`]: The Public API.** Runs a configured strategy with logging and
//!   progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
