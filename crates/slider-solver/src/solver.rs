//! Instrumented entry point: runs one driver and packages the result.
//!
//! Timing and memory measurement wrap the driver call here so the drivers
//! themselves stay oblivious to both.

use std::time::Instant;

use crate::board::Board;
use crate::memory::MemoryProbe;
use crate::report::Report;
use crate::search::Algorithm;

/// Configuration for a solve
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Driver to run
    pub algorithm: Algorithm,
    /// Reject boards with the wrong permutation parity before searching
    pub check_parity: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Ast,
            check_parity: true,
        }
    }
}

/// Result of a solve
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Solved(Report),
    /// The goal cannot be reached. `searched` is false when the parity
    /// check ruled the board out without running a driver.
    Unsolvable { searched: bool },
}

/// Solve `board` with the configured driver.
pub fn run(board: Board, config: &SolveConfig) -> Outcome {
    if config.check_parity && !board.is_solvable() {
        log::info!("board fails the parity check, skipping {}", config.algorithm);
        return Outcome::Unsolvable { searched: false };
    }

    let probe = MemoryProbe::start();
    let start = Instant::now();
    let solution = config.algorithm.solve(board);
    let elapsed = start.elapsed();

    match solution {
        Some(solution) => {
            let report = Report::new(&solution, elapsed, probe.peak_delta_bytes());
            Outcome::Solved(report)
        }
        None => Outcome::Unsolvable { searched: true },
    }
}
