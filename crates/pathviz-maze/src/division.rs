//! Recursive division.
//!
//! Walls are drawn on even rows/columns and gaps are punched on odd ones,
//! so every chamber stays connected to its neighbours through at least one
//! opening per dividing line. The start, the end and their orthogonal
//! neighbours never receive a wall, so an endpoint sitting where two lines
//! cross stays reachable.

use pathviz_core::{Grid, Point};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Accumulates walls in the order they are drawn.
pub(crate) struct Divider<'a, R: Rng> {
    grid: &'a Grid,
    rng: &'a mut R,
    /// Cells already walled or kept open.
    closed: Vec<bool>,
    walls: Vec<Point>,
}

impl<'a, R: Rng> Divider<'a, R> {
    pub(crate) fn new(grid: &'a Grid, rng: &'a mut R) -> Self {
        let mut closed = vec![false; grid.len()];
        for e in [grid.start(), grid.end()] {
            let around = grid.neighbors(e).filter_map(|p| grid.idx(p));
            for i in grid.idx(e).into_iter().chain(around) {
                closed[i] = true;
            }
        }
        Self {
            grid,
            rng,
            closed,
            walls: Vec::new(),
        }
    }

    /// Draw the outer border, then divide the interior
    /// `[2, rows-3] × [2, cols-3]` starting with a horizontal line.
    pub(crate) fn run(mut self) -> Vec<Point> {
        let bounds = self.grid.bounds();
        for p in bounds.iter().filter(|&p| bounds.on_border(p)) {
            self.place(p);
        }
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        self.divide(2, rows - 3, 2, cols - 3, Orientation::Horizontal);
        self.walls
    }

    fn place(&mut self, p: Point) {
        let Some(i) = self.grid.idx(p) else {
            return;
        };
        if self.closed[i] {
            return;
        }
        self.closed[i] = true;
        self.walls.push(p);
    }

    /// Pick `start + 2k` uniformly for `k` such that the value stays `<= end`.
    fn pick_every_other(&mut self, start: i32, end: i32) -> i32 {
        let choices = (end - start) / 2 + 1;
        start + 2 * self.rng.random_range(0..choices)
    }

    fn divide(&mut self, row_start: i32, row_end: i32, col_start: i32, col_end: i32, orientation: Orientation) {
        if row_end < row_start || col_end < col_start {
            return;
        }
        match orientation {
            Orientation::Horizontal => {
                let wall_row = self.pick_every_other(row_start, row_end);
                let gap_col = self.pick_every_other(col_start - 1, col_end + 1);
                for col in col_start - 1..=col_end + 1 {
                    if col != gap_col {
                        self.place(Point::new(wall_row, col));
                    }
                }
                let width = col_end - col_start;
                let above = if wall_row - 2 - row_start > width {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                self.divide(row_start, wall_row - 2, col_start, col_end, above);
                let below = if row_end - (wall_row + 2) > width {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                self.divide(wall_row + 2, row_end, col_start, col_end, below);
            }
            Orientation::Vertical => {
                let wall_col = self.pick_every_other(col_start, col_end);
                let gap_row = self.pick_every_other(row_start - 1, row_end + 1);
                for row in row_start - 1..=row_end + 1 {
                    if row != gap_row {
                        self.place(Point::new(row, wall_col));
                    }
                }
                let height = row_end - row_start;
                let left = if height > wall_col - 2 - col_start {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                self.divide(row_start, row_end, col_start, wall_col - 2, left);
                let right = if height > col_end - (wall_col + 2) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                self.divide(row_start, row_end, wall_col + 2, col_end, right);
            }
        }
    }
}
