use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pathviz_core::{Grid, GridError, Point};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::division::Divider;

/// Probability that a non-endpoint cell becomes a wall in a random-walls maze.
pub const WALL_PROBABILITY: f64 = 0.3;

/// The available maze generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MazeKind {
    Random,
    Recursive,
}

impl MazeKind {
    pub const ALL: [MazeKind; 2] = [MazeKind::Random, MazeKind::Recursive];

    pub const fn id(self) -> &'static str {
        match self {
            MazeKind::Random => "random",
            MazeKind::Recursive => "recursive",
        }
    }

    /// Delay between two consecutive wall placements when the plan is
    /// animated.
    pub const fn step_delay(self) -> Duration {
        match self {
            MazeKind::Random => Duration::from_millis(5),
            MazeKind::Recursive => Duration::from_millis(10),
        }
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Error returned when parsing an unknown maze name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown maze {0:?} (expected random or recursive)")]
pub struct UnknownMaze(pub String);

impl FromStr for MazeKind {
    type Err = UnknownMaze;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(MazeKind::Random),
            "recursive" | "division" => Ok(MazeKind::Recursive),
            _ => Err(UnknownMaze(s.to_string())),
        }
    }
}

/// An ordered list of wall cells plus the cadence at which to reveal them.
///
/// Cells are unique, in bounds and never an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazePlan {
    pub kind: MazeKind,
    pub walls: Vec<Point>,
}

impl MazePlan {
    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.kind.step_delay()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Offset of the `i`-th wall from the start of the animation.
    pub fn offset(&self, i: usize) -> Duration {
        self.step_delay() * i as u32
    }

    /// Place every wall of the plan at once.
    pub fn apply(&self, grid: &Grid) -> Result<Grid, GridError> {
        let mut g = grid.clone();
        for &p in &self.walls {
            g.node_mut(p)?.is_wall = true;
        }
        Ok(g)
    }
}

/// Maze generator producing [`MazePlan`]s for a grid.
///
/// Generation only reads the grid's shape and endpoints; walls already on the
/// grid are ignored.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a plan of the given kind.
    pub fn generate(&mut self, kind: MazeKind, grid: &Grid) -> MazePlan {
        let walls = match kind {
            MazeKind::Random => self.random_walls(grid),
            MazeKind::Recursive => self.recursive_division(grid),
        };
        log::debug!("{kind} maze: {} walls on a {}x{} grid", walls.len(), grid.rows(), grid.cols());
        MazePlan { kind, walls }
    }

    /// Every non-endpoint cell independently becomes a wall with probability
    /// [`WALL_PROBABILITY`]; the chosen cells are returned shuffled.
    pub fn random_walls(&mut self, grid: &Grid) -> Vec<Point> {
        let mut walls: Vec<Point> = grid
            .nodes()
            .iter()
            .filter(|n| !n.is_endpoint())
            .map(|n| n.pos)
            .filter(|_| self.rng.random_bool(WALL_PROBABILITY))
            .collect();
        walls.shuffle(&mut self.rng);
        walls
    }

    /// Border first, then recursive division of the interior.
    pub fn recursive_division(&mut self, grid: &Grid) -> Vec<Point> {
        Divider::new(grid, &mut self.rng).run()
    }
}
