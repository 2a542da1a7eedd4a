use std::collections::VecDeque;

use pathviz_core::{Grid, GridError, Point};

/// Unweighted breadth-first search from `start` toward `goal`.
///
/// Explores in strict FIFO order, so the first time `goal` is dequeued it
/// has been reached by a minimum edge-count path. Walls are never enqueued.
/// Each reached node records its edge count in `distance` and its parent in
/// `previous`; nodes are flagged `is_visited` in dequeue order, which is the
/// returned visit order.
///
/// Returns as soon as `goal` is dequeued, or after the reachable region is
/// exhausted.
pub fn bfs(grid: &mut Grid, start: Point, goal: Point) -> Result<Vec<Point>, GridError> {
    let si = grid.index_of(start)?;
    let gi = grid.index_of(goal)?;

    let mut visited = Vec::new();
    let mut seen = vec![false; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    seen[si] = true;
    let s = grid.node_at_mut(si);
    s.distance = 0;
    s.previous = None;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let cp = grid.point(ci);
        let current = grid.node_at_mut(ci);
        current.is_visited = true;
        let current_dist = current.distance;
        visited.push(cp);

        if ci == gi {
            break;
        }

        nbuf.clear();
        nbuf.extend(grid.neighbors(cp).filter_map(|np| grid.idx(np)));

        for &ni in nbuf.iter() {
            if seen[ni] || grid.node_at(ni).is_wall {
                continue;
            }
            seen[ni] = true;
            let n = grid.node_at_mut(ni);
            n.distance = current_dist + 1;
            n.previous = Some(ci);
            queue.push_back(ni);
        }
    }

    Ok(visited)
}
