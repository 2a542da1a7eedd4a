use pathviz_core::{Grid, GridError, Point};

use crate::frontier::Frontier;

/// Uniform-cost (Dijkstra) search from `start` toward `goal`.
///
/// Repeatedly finalizes the candidate with the smallest `distance`,
/// relaxing its four orthogonal neighbours by unit cost. Walls may enter the
/// candidate pool but are skipped when extracted and are never flagged
/// visited. Returns the finalized nodes in order, stopping as soon as `goal`
/// is finalized or the pool runs dry.
pub fn dijkstra(grid: &mut Grid, start: Point, goal: Point) -> Result<Vec<Point>, GridError> {
    let si = grid.index_of(start)?;
    let gi = grid.index_of(goal)?;

    let mut visited = Vec::new();
    let mut open = Frontier::new();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    let s = grid.node_at_mut(si);
    s.distance = 0;
    s.previous = None;
    open.push(si, 0);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        let cn = grid.node_at(ci);
        // Skip superseded entries and already finalized nodes.
        if cn.is_visited || current.cost != cn.distance {
            continue;
        }
        if cn.is_wall {
            continue;
        }
        let current_dist = cn.distance;
        grid.node_at_mut(ci).is_visited = true;
        let cp = grid.point(ci);
        visited.push(cp);

        if ci == gi {
            break;
        }

        nbuf.clear();
        nbuf.extend(grid.neighbors(cp).filter_map(|np| grid.idx(np)));

        for &ni in nbuf.iter() {
            let tentative = current_dist + 1;
            let n = grid.node_at_mut(ni);
            if n.is_visited || tentative >= n.distance {
                continue;
            }
            n.distance = tentative;
            n.previous = Some(ci);
            open.push(ni, tentative);
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::UNREACHABLE;

    #[test]
    fn finalizes_in_distance_order() {
        let mut g = Grid::from_ascii(
            "
            S....
            .....
            ....E
            ",
        )
        .unwrap();
        let (s, e) = (g.start(), g.end());
        let visited = dijkstra(&mut g, s, e).unwrap();
        let dists: Vec<u32> = visited.iter().map(|&p| g.node(p).unwrap().distance).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(g.node(e).unwrap().distance, 6);
        // Everything closer than the goal is finalized before it.
        assert_eq!(visited.len(), 15);
    }

    #[test]
    fn dequeued_walls_are_skipped() {
        let mut g = Grid::from_ascii(
            "
            S#E
            ...
            ",
        )
        .unwrap();
        let (s, e) = (g.start(), g.end());
        let visited = dijkstra(&mut g, s, e).unwrap();
        let wall = Point::new(0, 1);
        assert!(!visited.contains(&wall));
        assert!(!g.node(wall).unwrap().is_visited);
        // The wall was relaxed and pooled, just never expanded.
        assert_eq!(g.node(wall).unwrap().distance, 1);
        assert_eq!(g.node(e).unwrap().distance, 4);
    }

    #[test]
    fn enclosed_goal_is_never_reached() {
        let mut g = Grid::from_ascii(
            "
            S....
            ...#.
            ..#E#
            ...#.
            ",
        )
        .unwrap();
        let (s, e) = (g.start(), g.end());
        let visited = dijkstra(&mut g, s, e).unwrap();
        assert!(!visited.contains(&e));
        assert_eq!(g.node(e).unwrap().distance, UNREACHABLE);
        let open_cells = g.nodes().iter().filter(|n| !n.is_wall).count();
        // Everything except the goal and the sealed corner below it.
        assert_eq!(visited.len(), open_cells - 2);
    }
}
