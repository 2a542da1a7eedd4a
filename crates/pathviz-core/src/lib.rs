//! **pathviz-core**: grid and node model for the pathfinding visualizer.
//!
//! This crate provides the foundational types shared by the search engine,
//! the maze generators and the animation scheduler: geometry primitives, the
//! [`Node`] record, and the copy-on-write [`Grid`] arena.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use node::{Node, NodeKind, UNREACHABLE};
