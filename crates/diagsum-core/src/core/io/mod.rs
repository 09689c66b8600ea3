//! Provides input/output functionality for grid text encodings.
//!
//! The on-disk format is `n` lines of exactly `n` decimal digits with no separators.
//! A trait-based interface keeps the file plumbing separate from the format itself.

pub mod text;
pub mod traits;
