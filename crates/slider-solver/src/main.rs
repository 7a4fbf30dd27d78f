//! CLI entry point for the slider solver.
//!
//! Usage:
//!   slider-solver <bfs|dfs|ast> <TILES> [options]
//!   slider-solver show <TILES>
//!
//! Options:
//!   --output <path>        Report file (default: output.txt)
//!   --json                 Echo the report as JSON instead of text
//!   --skip-parity-check    Search even when the board has the wrong parity
//!
//! Set `RUST_LOG=debug` for search progress on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use slider_solver::goal::Goal;
use slider_solver::heuristic::manhattan;
use slider_solver::{run, Algorithm, Board, Outcome, SolveConfig};

#[derive(Parser)]
#[command(name = "slider-solver")]
#[command(about = "Solve the n^2-1 sliding-tile puzzle with BFS, DFS or A*")]
#[command(version)]
struct Cli {
    /// Search method
    #[arg(value_enum, ignore_case = true)]
    method: Method,

    /// Comma-separated tiles in row-major order, 0 for the blank
    #[arg(value_name = "TILES")]
    tiles: String,

    /// File the text report is written to
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Echo the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Run the search even when the parity check says the goal is unreachable
    #[arg(long)]
    skip_parity_check: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Bfs,
    Dfs,
    Ast,
    /// Print the board and its successors without searching
    #[value(alias = "test")]
    Show,
}

impl Method {
    fn algorithm(self) -> Option<Algorithm> {
        match self {
            Method::Bfs => Some(Algorithm::Bfs),
            Method::Dfs => Some(Algorithm::Dfs),
            Method::Ast => Some(Algorithm::Ast),
            Method::Show => None,
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let board = Board::parse(&cli.tiles)
        .with_context(|| format!("failed to parse tiles '{}'", cli.tiles))?;

    match cli.method.algorithm() {
        Some(algorithm) => solve(&cli, board, algorithm),
        None => {
            show(&board);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn solve(cli: &Cli, board: Board, algorithm: Algorithm) -> Result<ExitCode> {
    let config = SolveConfig {
        algorithm,
        check_parity: !cli.skip_parity_check,
    };
    log::info!("solving {}x{} board with {}", board.size(), board.size(), algorithm);

    match run(board, &config) {
        Outcome::Solved(report) => {
            report
                .write_text(&cli.output)
                .with_context(|| format!("failed to save report for {algorithm}"))?;
            if cli.json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Unsolvable { searched } => {
            println!("puzzle unsolvable");
            if !searched {
                eprintln!("(rejected by the parity check; pass --skip-parity-check to search anyway)");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show(board: &Board) {
    let goal = Goal::for_board(board);
    println!("{board}");
    println!("manhattan distance: {}", manhattan(board, &goal));
    println!("solvable: {}", board.is_solvable());
    for (mv, child) in board.successors() {
        println!("\nmoved 0 {mv}:\n{child}");
    }
}
