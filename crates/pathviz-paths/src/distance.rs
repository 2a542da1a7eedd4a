use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent on a 4-connected unit-cost grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}
