//! Result formatting for a finished search.
//!
//! The text form lists one `key: value` pair per line and is what gets
//! written to the output file; the JSON form mirrors the same fields.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Move;
use crate::error::{Error, Result};
use crate::search::Solution;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Everything reported about one solved board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub path_to_goal: Vec<Move>,
    pub cost_of_path: u32,
    pub nodes_expanded: usize,
    pub search_depth: u32,
    pub max_search_depth: u32,
    /// Seconds
    pub running_time: f64,
    /// MiB of peak resident memory added during the search
    pub max_ram_usage: f64,
}

impl Report {
    pub fn new(solution: &Solution, running_time: Duration, ram_bytes: u64) -> Self {
        Self {
            path_to_goal: solution.path(),
            cost_of_path: solution.cost(),
            nodes_expanded: solution.stats.nodes_expanded,
            search_depth: solution.stats.search_depth,
            max_search_depth: solution.stats.max_search_depth,
            running_time: running_time.as_secs_f64(),
            max_ram_usage: ram_bytes as f64 / BYTES_PER_MIB,
        }
    }

    pub fn to_text(&self) -> String {
        let path: Vec<String> = self
            .path_to_goal
            .iter()
            .map(|mv| format!("'{mv}'"))
            .collect();
        format!(
            "path_to_goal: [{}]\n\
             cost_of_path: {}\n\
             nodes_expanded: {}\n\
             search_depth: {}\n\
             max_search_depth: {}\n\
             running_time: {:.8}\n\
             max_ram_usage: {:.8}\n",
            path.join(", "),
            self.cost_of_path,
            self.nodes_expanded,
            self.search_depth,
            self.max_search_depth,
            self.running_time,
            self.max_ram_usage,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the text form to `path`, replacing any existing file.
    pub fn write_text(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text()).map_err(|source| Error::Io {
            operation: format!("write report to {}", path.display()),
            source,
        })
    }
}
