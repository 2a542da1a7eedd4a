//! Maze generators for the pathfinding visualizer.
//!
//! A generator never touches the grid it is given. It returns a
//! [`MazePlan`]: the ordered wall cells to place, together with the delay
//! between placements when the plan is animated.
//!
//! - **Random walls**: each cell is walled with probability 0.3, then the
//!   selection is shuffled.
//! - **Recursive division**: the border is walled, then the interior is split
//!   by walls with a single gap each, alternating orientation by chamber
//!   shape.

mod division;
mod mapgen;

pub use mapgen::{MazeGen, MazeKind, MazePlan, UnknownMaze, WALL_PROBABILITY};


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_ids_round_trip() {
        for kind in MazeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
