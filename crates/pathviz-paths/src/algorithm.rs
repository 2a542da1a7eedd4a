use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, GridError, Point};
use thiserror::Error;

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dijkstra::dijkstra;
use crate::path::RunResult;

/// The shared search contract: mutate the node state of `grid` (which the
/// caller owns for the duration of the run) and return the visit order.
pub type SearchFn = fn(&mut Grid, Point, Point) -> Result<Vec<Point>, GridError>;

/// The interchangeable search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Bfs];

    /// Stable identifier used in reports and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Bfs => "bfs",
        }
    }

    /// The function implementing this algorithm.
    pub fn search_fn(self) -> SearchFn {
        match self {
            Algorithm::Dijkstra => dijkstra,
            Algorithm::AStar => astar,
            Algorithm::Bfs => bfs,
        }
    }

    /// Run the search on `grid` and return the visit order.
    #[inline]
    pub fn search(self, grid: &mut Grid, start: Point, goal: Point) -> Result<Vec<Point>, GridError> {
        (self.search_fn())(grid, start, goal)
    }

    /// Run the search, then rebuild the path from the back-references this
    /// run left in `grid` and flag its nodes `is_path` when it is start-rooted.
    pub fn run(self, grid: &mut Grid, start: Point, goal: Point) -> Result<RunResult, GridError> {
        let visited = self.search(grid, start, goal)?;
        let result = RunResult::from_search(grid, start, goal, visited)?;
        log::debug!(
            "{}: visited {} nodes, path length {}",
            self,
            result.visited.len(),
            result.path_length()
        );
        Ok(result)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected dijkstra, astar or bfs)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "bfs" => Ok(Algorithm::Bfs),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
