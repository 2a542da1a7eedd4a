use pathviz_core::{Grid, GridError, Point};
use thiserror::Error;

use crate::speed::Speed;

/// Errors raised while building a [`Visualizer`](crate::Visualizer).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid grid layout: {0}")]
    Grid(#[from] GridError),
}

/// Grid shape, endpoint placement and initial replay speed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisualizerConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub end: Point,
    pub speed: Speed,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Point::new(10, 15),
            end: Point::new(10, 35),
            speed: Speed::Medium,
        }
    }
}

impl VisualizerConfig {
    /// A fresh wall-free grid for this layout.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.start, self.end)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let g = VisualizerConfig::default().build_grid().unwrap();
        assert_eq!((g.rows(), g.cols()), (20, 50));
        assert_eq!(g.start(), Point::new(10, 15));
        assert_eq!(g.end(), Point::new(10, 35));
    }

    #[test]
    fn bad_layout_is_reported() {
        let cfg = VisualizerConfig {
            end: Point::new(25, 0),
            ..Default::default()
        };
        let err = cfg.build_grid().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Grid(GridError::InvalidCoordinate { .. })
        ));
        assert!(err.to_string().starts_with("invalid grid layout"));
    }
}
