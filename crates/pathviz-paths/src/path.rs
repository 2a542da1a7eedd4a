use pathviz_core::{Grid, GridError, Point};

/// Walk `previous` links from `goal` back to the root of its chain and
/// return the chain in start-to-goal order.
///
/// If `goal` was never reached the result is just `[goal]`, whose first
/// element is not the start: callers must treat a non-start-rooted result as
/// "no path". The walk is bounded by the arena size, so a corrupted chain
/// cannot loop forever.
pub fn reconstruct_path(grid: &Grid, goal: Point) -> Result<Vec<Point>, GridError> {
    let mut ci = grid.index_of(goal)?;
    let mut path = vec![goal];
    for _ in 0..grid.len() {
        let Some(prev) = grid.node_at(ci).previous else {
            break;
        };
        path.push(grid.point(prev));
        ci = prev;
    }
    path.reverse();
    Ok(path)
}

/// Output of one search run: the exploration order plus the path rebuilt
/// from that same run's back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub start: Point,
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
}

impl RunResult {
    /// Rebuild the path to `goal` from the back-references a finished search
    /// left in `grid`, flagging its nodes `is_path` when it is start-rooted.
    pub fn from_search(grid: &mut Grid, start: Point, goal: Point, visited: Vec<Point>) -> Result<Self, GridError> {
        let path = reconstruct_path(grid, goal)?;
        let result = RunResult { start, visited, path };
        if let Some(path) = result.found_path() {
            for &p in path {
                grid.node_mut(p)?.is_path = true;
            }
        }
        Ok(result)
    }

    /// Whether the reconstructed path is rooted at the start.
    #[inline]
    pub fn success(&self) -> bool {
        self.path.first() == Some(&self.start)
    }

    /// Number of cells on the path, or 0 when no path was found.
    #[inline]
    pub fn path_length(&self) -> usize {
        if self.success() { self.path.len() } else { 0 }
    }

    /// The path when one was found.
    #[inline]
    pub fn found_path(&self) -> Option<&[Point]> {
        self.success().then_some(self.path.as_slice())
    }
}
