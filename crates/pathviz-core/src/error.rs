//! Error types for grid operations.

use thiserror::Error;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) construction and addressing.
///
/// These signal programmer errors (bad coordinates or dimensions), not
/// recoverable user conditions: an unreachable goal is a normal search
/// outcome and is never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A point outside `[0, rows) × [0, cols)` was addressed.
    #[error("coordinate {point} is outside the {rows}x{cols} grid")]
    InvalidCoordinate { point: Point, rows: i32, cols: i32 },
    /// A grid was requested with a zero or negative dimension.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
    /// Start and end were placed on the same cell.
    #[error("start and end must be distinct cells, both were {0}")]
    InvalidEndpoints(Point),
    /// A grid picture did not mark the named endpoint.
    #[error("grid picture has no {0} cell")]
    MissingEndpoint(&'static str),
}
