//! The [`Node`] type: one addressable grid cell with wall and search state.

use crate::geom::Point;

/// Sentinel value meaning "not reached" for [`Node::distance`] and
/// [`Node::total_cost`].
pub const UNREACHABLE: u32 = u32::MAX;

/// A single grid cell.
///
/// `is_visited`, `is_path`, `distance`, `total_cost` and `previous` are
/// transient: they describe the most recent search run on the grid that owns
/// this node and are cleared by [`Grid::reset_search_state`](crate::Grid::reset_search_state).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    pub is_visited: bool,
    pub is_path: bool,
    pub distance: u32,
    pub total_cost: u32,
    /// Flat arena index of the predecessor on the best known path.
    pub previous: Option<usize>,
}

/// Display classification of a node.
///
/// Precedence follows what a painter would show on top:
/// start, end, wall, path, visited, then empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Start,
    End,
    Wall,
    Path,
    Visited,
    Empty,
}

impl Node {
    /// A fresh node at `pos` with no flags and unreached costs.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            is_start: false,
            is_end: false,
            is_wall: false,
            is_visited: false,
            is_path: false,
            distance: UNREACHABLE,
            total_cost: UNREACHABLE,
            previous: None,
        }
    }

    /// Whether this node is the start or the end (never a wall).
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }

    /// Clear every transient search field, keeping position, endpoints and
    /// wall state.
    #[inline]
    pub fn clear_search(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = UNREACHABLE;
        self.total_cost = UNREACHABLE;
        self.previous = None;
    }

    /// Classify the node for display.
    pub fn kind(&self) -> NodeKind {
        if self.is_start {
            NodeKind::Start
        } else if self.is_end {
            NodeKind::End
        } else if self.is_wall {
            NodeKind::Wall
        } else if self.is_path {
            NodeKind::Path
        } else if self.is_visited {
            NodeKind::Visited
        } else {
            NodeKind::Empty
        }
    }
}
