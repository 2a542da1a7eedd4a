use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use pathviz_paths::{Algorithm, RunResult};

use crate::speed::Speed;

/// Summary of one search run, delivered when its replay finishes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// Number of cells the search finalized.
    pub visited_nodes: usize,
    /// Cells on the path, or 0 when none was found.
    pub path_length: usize,
    /// Wall-clock time of the search itself, replay excluded.
    pub execution_time: Duration,
    /// Scheduled length of the replay.
    pub visual_time: Duration,
    pub success: bool,
}

impl RunReport {
    /// Build the report for `result`, replayed at `speed`.
    pub fn new(algorithm: Algorithm, result: &RunResult, execution_time: Duration, speed: Speed) -> Self {
        let success = result.success() && result.path.len() > 1;
        let visited_nodes = result.visited.len();
        let path_length = if success { result.path.len() } else { 0 };
        let visual_time = speed.exploration_delay() * visited_nodes as u32
            + speed.path_delay() * path_length as u32;
        Self {
            algorithm,
            visited_nodes,
            path_length,
            execution_time,
            visual_time,
            success,
        }
    }

    /// Search time in fractional milliseconds.
    pub fn execution_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// Replay time in fractional seconds.
    pub fn visual_secs(&self) -> f64 {
        self.visual_time.as_secs_f64()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "Visited: {}  Path: {}  ", self.visited_nodes, self.path_length)?;
        } else {
            f.write_str("No path!  ")?;
        }
        write!(
            f,
            "Logic: {:.4}ms  Visual: {:.2}s",
            self.execution_ms(),
            self.visual_secs()
        )
    }
}

/// Latest report per algorithm.
#[derive(Debug, Clone, Default)]
pub struct ResultsBoard {
    reports: HashMap<Algorithm, RunReport>,
}

impl ResultsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `report`, replacing any earlier one for the same algorithm.
    pub fn record(&mut self, report: RunReport) {
        self.reports.insert(report.algorithm, report);
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&RunReport> {
        self.reports.get(&algorithm)
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Reports in [`Algorithm::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &RunReport> + '_ {
        Algorithm::ALL.into_iter().filter_map(|a| self.reports.get(&a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Point;

    fn result(visited: usize, path: Vec<Point>) -> RunResult {
        RunResult {
            start: Point::new(0, 0),
            visited: vec![Point::new(0, 0); visited],
            path,
        }
    }

    #[test]
    fn successful_report() {
        let path: Vec<Point> = (0..21).map(|c| Point::new(0, c)).collect();
        let r = RunReport::new(
            Algorithm::Dijkstra,
            &result(400, path),
            Duration::from_micros(1250),
            Speed::Medium,
        );
        assert!(r.success);
        assert_eq!(r.path_length, 21);
        // 400 * 10ms + 21 * 50ms
        assert_eq!(r.visual_time, Duration::from_millis(5050));
        assert_eq!(
            r.to_string(),
            "Visited: 400  Path: 21  Logic: 1.2500ms  Visual: 5.05s"
        );
    }

    #[test]
    fn failed_report_ignores_path_time() {
        let r = RunReport::new(
            Algorithm::Bfs,
            &result(30, vec![Point::new(3, 3)]),
            Duration::ZERO,
            Speed::Fast,
        );
        assert!(!r.success);
        assert_eq!(r.path_length, 0);
        assert_eq!(r.visual_time, Duration::from_millis(60));
        assert_eq!(r.to_string(), "No path!  Logic: 0.0000ms  Visual: 0.06s");
    }

    #[test]
    fn board_keeps_latest_per_algorithm() {
        let mut board = ResultsBoard::new();
        let a = RunReport::new(Algorithm::AStar, &result(5, vec![]), Duration::ZERO, Speed::Fast);
        let mut b = a.clone();
        b.visited_nodes = 9;
        board.record(a);
        board.record(b);
        board.record(RunReport::new(Algorithm::Dijkstra, &result(1, vec![]), Duration::ZERO, Speed::Fast));
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(Algorithm::AStar).map(|r| r.visited_nodes), Some(9));
        let order: Vec<_> = board.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, vec![Algorithm::Dijkstra, Algorithm::AStar]);
        board.clear();
        assert!(board.is_empty());
    }
}
