//! The [`Grid`] type: a copy-on-write arena of [`Node`]s.
//!
//! Cloning a `Grid` is cheap: clones share the same backing arena until one
//! of them is mutated, at which point the mutating side gets its own copy.
//! Every public mutator takes `&self` and returns a new `Grid`, so a snapshot
//! captured by an in-flight run never observes later edits.

use std::fmt;
use std::sync::Arc;

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::{Node, NodeKind};

/// A `rows × cols` grid of nodes with one start and one end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nodes: Arc<Vec<Node>>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create a wall-free grid with the given endpoints.
    pub fn new(rows: i32, cols: i32, start: Point, end: Point) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let bounds = Range::with_size(rows, cols);
        for p in [start, end] {
            if !bounds.contains(p) {
                return Err(GridError::InvalidCoordinate { point: p, rows, cols });
            }
        }
        if start == end {
            return Err(GridError::InvalidEndpoints(start));
        }
        let nodes = bounds
            .iter()
            .map(|p| {
                let mut n = Node::new(p);
                n.is_start = p == start;
                n.is_end = p == end;
                n
            })
            .collect();
        Ok(Self {
            nodes: Arc::new(nodes),
            bounds,
            start,
            end,
        })
    }

    /// Parse a grid from an ASCII picture, one line per row.
    ///
    /// `S` marks the start, `E` the end, `#` a wall; any other character is
    /// an empty cell. Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(picture: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut start = None;
        let mut end = None;
        let mut walls = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(GridError::InvalidDimensions { rows, cols: line.chars().count() as i32 });
            }
            for (c, ch) in line.chars().enumerate() {
                let p = Point::new(r as i32, c as i32);
                match ch {
                    'S' => start = Some(p),
                    'E' => end = Some(p),
                    '#' => walls.push(p),
                    _ => {}
                }
            }
        }
        let start = start.ok_or(GridError::MissingEndpoint("start"))?;
        let end = end.ok_or(GridError::MissingEndpoint("end"))?;
        let mut grid = Self::new(rows, cols, start, end)?;
        for p in walls {
            grid.node_mut(p)?.is_wall = true;
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Shape and addressing
    // -----------------------------------------------------------------------

    /// The bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a point to a flat arena index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols() as usize) + p.col as usize)
    }

    /// Like [`idx`](Self::idx) but reports an out-of-range point as an error.
    #[inline]
    pub fn index_of(&self, p: Point) -> Result<usize, GridError> {
        self.idx(p).ok_or(GridError::InvalidCoordinate {
            point: p,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols() as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// In-bounds orthogonal neighbours of `p` (up, down, left, right).
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    // -----------------------------------------------------------------------
    // Node access
    // -----------------------------------------------------------------------

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Read the node at `p`.
    pub fn node(&self, p: Point) -> Result<&Node, GridError> {
        let i = self.index_of(p)?;
        Ok(&self.nodes[i])
    }

    /// Read the node at flat index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Mutable access to the node at `p`.
    ///
    /// Detaches this grid from any clone sharing the arena, so the edit is
    /// invisible to other snapshots.
    pub fn node_mut(&mut self, p: Point) -> Result<&mut Node, GridError> {
        let i = self.index_of(p)?;
        Ok(&mut Arc::make_mut(&mut self.nodes)[i])
    }

    /// Mutable access by flat index; see [`node_mut`](Self::node_mut).
    #[inline]
    pub fn node_at_mut(&mut self, idx: usize) -> &mut Node {
        &mut Arc::make_mut(&mut self.nodes)[idx]
    }

    /// Whether this grid and `other` share the same backing arena.
    #[inline]
    pub fn shares_arena(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Number of wall nodes.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall).count()
    }

    // -----------------------------------------------------------------------
    // Copy-on-write mutators
    // -----------------------------------------------------------------------

    /// Return a grid with the wall at `p` flipped, or set to `forced` when
    /// given. The start and end are immune: the result is an unchanged
    /// snapshot sharing this grid's arena.
    pub fn toggle_wall(&self, p: Point, forced: Option<bool>) -> Result<Grid, GridError> {
        let i = self.index_of(p)?;
        let node = &self.nodes[i];
        if node.is_endpoint() {
            return Ok(self.clone());
        }
        let value = forced.unwrap_or(!node.is_wall);
        if value == node.is_wall {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        next.node_at_mut(i).is_wall = value;
        Ok(next)
    }

    /// Return a grid with every transient search field cleared and the wall
    /// layout preserved.
    pub fn reset_search_state(&self) -> Grid {
        let mut next = self.clone();
        for n in Arc::make_mut(&mut next.nodes).iter_mut() {
            n.clear_search();
        }
        next
    }

    /// Return a grid with every wall removed. Search state is kept.
    pub fn clear_walls(&self) -> Grid {
        let mut next = self.clone();
        for n in Arc::make_mut(&mut next.nodes).iter_mut() {
            n.is_wall = false;
        }
        next
    }
}

impl fmt::Display for Grid {
    /// Render the grid one line per row: `S` start, `E` end, `#` wall,
    /// `*` path, `o` visited, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.nodes.chunks(self.cols() as usize) {
            for n in row {
                let ch = match n.kind() {
                    NodeKind::Start => 'S',
                    NodeKind::End => 'E',
                    NodeKind::Wall => '#',
                    NodeKind::Path => '*',
                    NodeKind::Visited => 'o',
                    NodeKind::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::UNREACHABLE;

    fn grid() -> Grid {
        Grid::new(4, 6, Point::new(1, 1), Point::new(2, 4)).unwrap()
    }

    #[test]
    fn new_initialises_every_node() {
        let g = grid();
        assert_eq!(g.len(), 24);
        for (i, n) in g.nodes().iter().enumerate() {
            assert_eq!(n.pos, g.point(i));
            assert_eq!(n.distance, UNREACHABLE);
            assert_eq!(n.total_cost, UNREACHABLE);
            assert!(!n.is_wall && !n.is_visited && !n.is_path);
            assert_eq!(n.previous, None);
        }
        assert!(g.node(Point::new(1, 1)).unwrap().is_start);
        assert!(g.node(Point::new(2, 4)).unwrap().is_end);
        assert_eq!(g.nodes().iter().filter(|n| n.is_start).count(), 1);
        assert_eq!(g.nodes().iter().filter(|n| n.is_end).count(), 1);
    }

    #[test]
    fn new_rejects_bad_shapes() {
        assert_eq!(
            Grid::new(0, 5, Point::ZERO, Point::new(0, 1)),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(matches!(
            Grid::new(3, 3, Point::new(3, 0), Point::ZERO),
            Err(GridError::InvalidCoordinate { .. })
        ));
        assert_eq!(
            Grid::new(3, 3, Point::new(1, 1), Point::new(1, 1)),
            Err(GridError::InvalidEndpoints(Point::new(1, 1)))
        );
    }

    #[test]
    fn idx_and_point_round_trip() {
        let g = grid();
        for p in g.bounds() {
            let i = g.idx(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.idx(Point::new(4, 0)), None);
        assert_eq!(g.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn invalid_coordinate_is_reported() {
        let g = grid();
        let err = g.node(Point::new(9, 9)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCoordinate {
                point: Point::new(9, 9),
                rows: 4,
                cols: 6
            }
        );
        assert!(g.toggle_wall(Point::new(-1, 0), None).is_err());
        assert_eq!(err.to_string(), "coordinate (9, 9) is outside the 4x6 grid");
    }

    #[test]
    fn toggle_wall_is_copy_on_write() {
        let g = grid();
        let p = Point::new(0, 3);
        let walled = g.toggle_wall(p, None).unwrap();
        assert!(walled.node(p).unwrap().is_wall);
        assert!(!g.node(p).unwrap().is_wall);
        assert!(!walled.shares_arena(&g));

        let back = walled.toggle_wall(p, None).unwrap();
        assert!(!back.node(p).unwrap().is_wall);
        assert!(walled.node(p).unwrap().is_wall);
    }

    #[test]
    fn toggle_wall_forced_value() {
        let g = grid();
        let p = Point::new(3, 5);
        let a = g.toggle_wall(p, Some(true)).unwrap();
        let b = a.toggle_wall(p, Some(true)).unwrap();
        assert!(b.node(p).unwrap().is_wall);
        assert!(b.shares_arena(&a));
        let c = b.toggle_wall(p, Some(false)).unwrap();
        assert!(!c.node(p).unwrap().is_wall);
    }

    #[test]
    fn endpoints_are_immune_to_walls() {
        let g = grid();
        let s = g.toggle_wall(g.start(), Some(true)).unwrap();
        let e = s.toggle_wall(g.end(), None).unwrap();
        assert!(!e.node(g.start()).unwrap().is_wall);
        assert!(!e.node(g.end()).unwrap().is_wall);
        assert!(e.shares_arena(&g));
    }

    #[test]
    fn reset_search_state_preserves_walls() {
        let mut g = grid().toggle_wall(Point::new(0, 0), None).unwrap();
        {
            let n = g.node_mut(Point::new(2, 2)).unwrap();
            n.is_visited = true;
            n.is_path = true;
            n.distance = 3;
            n.total_cost = 5;
            n.previous = Some(0);
        }
        let snapshot = g.clone();
        let reset = g.reset_search_state();
        let n = reset.node(Point::new(2, 2)).unwrap();
        assert!(!n.is_visited && !n.is_path);
        assert_eq!(n.distance, UNREACHABLE);
        assert_eq!(n.previous, None);
        assert!(reset.node(Point::new(0, 0)).unwrap().is_wall);
        // The captured snapshot is untouched.
        assert_eq!(snapshot.node(Point::new(2, 2)).unwrap().distance, 3);
    }

    #[test]
    fn node_mut_detaches_from_clones() {
        let a = grid();
        let mut b = a.clone();
        assert!(b.shares_arena(&a));
        b.node_mut(Point::new(0, 0)).unwrap().distance = 0;
        assert!(!b.shares_arena(&a));
        assert_eq!(a.node(Point::new(0, 0)).unwrap().distance, UNREACHABLE);
    }

    #[test]
    fn neighbors_are_clipped() {
        let g = grid();
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(g.neighbors(Point::new(2, 2)).count(), 4);
    }

    #[test]
    fn ascii_round_trip() {
        let picture = "\
            S..#\n\
            .#..\n\
            ...E\n";
        let g = Grid::from_ascii(picture).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.end(), Point::new(2, 3));
        assert_eq!(g.wall_count(), 2);
        assert_eq!(g.to_string(), picture);
    }

    #[test]
    fn ascii_requires_both_endpoints() {
        assert_eq!(
            Grid::from_ascii("S..\n...\n"),
            Err(GridError::MissingEndpoint("end"))
        );
    }

    #[test]
    fn clear_walls_removes_every_wall() {
        let g = Grid::from_ascii("S#\n#E\n").unwrap();
        assert_eq!(g.wall_count(), 2);
        let cleared = g.clear_walls();
        assert_eq!(cleared.wall_count(), 0);
        assert_eq!(g.wall_count(), 2);
    }
}
