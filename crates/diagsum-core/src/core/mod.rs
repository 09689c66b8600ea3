//! # Core Module
//!
//! Fundamental data structures shared by every other layer.
//!
//! - **Grid Storage** ([`grid`]) - The square matrix of digit cells
//! - **File I/O** ([`io`]) - Reading and writing grids in their plain-text encoding

pub mod grid;
pub mod io;
