use pathviz_core::{Grid, GridError, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;

/// Heuristic best-first (A*) search from `start` toward `goal`.
///
/// Relaxation is identical to [`dijkstra`](crate::dijkstra), but candidates
/// are ordered by `total_cost = distance + manhattan(node, goal)`. Because the
/// Manhattan heuristic is consistent on a 4-connected unit grid, the first
/// time `goal` is finalized its `distance` is optimal.
///
/// A node whose cost improves while it is still a candidate keeps a single
/// live entry in the pool; the superseded entry is dropped on extraction.
pub fn astar(grid: &mut Grid, start: Point, goal: Point) -> Result<Vec<Point>, GridError> {
    let si = grid.index_of(start)?;
    let gi = grid.index_of(goal)?;

    let mut visited = Vec::new();
    let mut open = Frontier::new();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    {
        let node = grid.node_at_mut(si);
        node.distance = 0;
        node.total_cost = 0;
        node.previous = None;
    }
    open.push(si, 0);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        let cn = grid.node_at(ci);
        if cn.is_visited || current.cost != cn.total_cost {
            continue;
        }
        if cn.is_wall {
            continue;
        }
        let current_g = cn.distance;
        grid.node_at_mut(ci).is_visited = true;
        let cp = grid.point(ci);
        visited.push(cp);

        if ci == gi {
            break;
        }

        nbuf.clear();
        nbuf.extend(grid.neighbors(cp).filter_map(|np| grid.idx(np)));

        for &ni in nbuf.iter() {
            let np = grid.point(ni);
            let tentative_g = current_g + 1;
            let n = grid.node_at_mut(ni);
            if n.is_visited || tentative_g >= n.distance {
                continue;
            }
            n.previous = Some(ci);
            n.distance = tentative_g;
            n.total_cost = tentative_g + manhattan(np, goal);
            open.push(ni, n.total_cost);
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;

    #[test]
    fn open_field_heads_straight_for_goal() {
        let mut g = Grid::new(20, 50, Point::new(10, 15), Point::new(10, 35)).unwrap();
        let (s, e) = (g.start(), g.end());
        let visited = astar(&mut g, s, e).unwrap();
        assert_eq!(*visited.last().unwrap(), e);
        assert_eq!(g.node(e).unwrap().distance, 20);
        assert_eq!(g.node(e).unwrap().total_cost, 20);

        let mut d = Grid::new(20, 50, s, e).unwrap();
        let dijkstra_visited = dijkstra(&mut d, s, e).unwrap();
        assert!(visited.len() < dijkstra_visited.len());
    }

    #[test]
    fn detours_around_walls_optimally() {
        let mut g = Grid::from_ascii(
            "
            ......
            .####.
            S#..#E
            .#..#.
            ......
            ",
        )
        .unwrap();
        let (s, e) = (g.start(), g.end());
        let visited = astar(&mut g, s, e).unwrap();
        assert_eq!(*visited.last().unwrap(), e);
        assert_eq!(g.node(e).unwrap().distance, 9);
        assert!(visited.iter().all(|&p| !g.node(p).unwrap().is_wall));
    }

    #[test]
    fn start_has_zero_total_cost() {
        let mut g = Grid::from_ascii("S..E").unwrap();
        let (s, e) = (g.start(), g.end());
        astar(&mut g, s, e).unwrap();
        let n = g.node(s).unwrap();
        assert_eq!((n.distance, n.total_cost), (0, 0));
    }
}
