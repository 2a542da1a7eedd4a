//! Search algorithms for the pathfinding visualizer.
//!
//! Three interchangeable algorithms share one contract ([`SearchFn`]): they
//! run synchronously on a grid snapshot the caller owns, record `distance`,
//! `previous` and `is_visited` on its nodes, and return the order in which
//! nodes were finalized.
//!
//! - **BFS** unweighted FIFO search ([`bfs`])
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** best-first search with a Manhattan heuristic ([`astar`])
//!
//! [`reconstruct_path`] then walks the back-references left by the run, and
//! [`Algorithm::run`] bundles both steps into a [`RunResult`].

mod algorithm;
mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod frontier;
mod path;

pub use algorithm::{Algorithm, SearchFn, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use path::{RunResult, reconstruct_path};


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_ids_round_trip() {
        for algo in Algorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{}\"", algo.id()));
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algo);
        }
    }
}
