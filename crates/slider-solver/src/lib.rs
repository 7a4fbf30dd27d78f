//! Sliding-tile puzzle solver library.
//!
//! This crate solves the n^2-1 sliding puzzle (8-puzzle, 15-puzzle, ...)
//! with three interchangeable drivers: breadth-first, depth-first and A*
//! over the Manhattan-distance heuristic. The goal configuration places the
//! blank first: `0, 1, ..., n*n - 1`.

pub mod board;
pub mod error;
pub mod goal;
pub mod heuristic;
pub mod memory;
pub mod report;
pub mod search;
pub mod solver;
pub mod tree;

// Re-export main types
pub use board::{Board, Move};
pub use error::{Error, Result};
pub use goal::Goal;
pub use report::Report;
pub use search::{Algorithm, SearchStats, Solution};
pub use solver::{run, Outcome, SolveConfig};
pub use tree::{NodeId, SearchTree};
