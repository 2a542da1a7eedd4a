use pathviz_core::Point;
use pathviz_maze::MazeKind;
use pathviz_paths::Algorithm;

use crate::report::RunReport;

/// Receives replay events from a [`Visualizer`](crate::Visualizer).
///
/// Callbacks are invoked from [`advance`](crate::Visualizer::advance) and
/// [`finish`](crate::Visualizer::finish), in schedule order. By the time a
/// callback runs, the visualizer's grid already reflects the event.
pub trait Presenter {
    /// A cell was finalized by the search being replayed.
    fn on_cell_explored(&mut self, p: Point);

    /// A cell belongs to the shortest path being replayed.
    fn on_cell_on_path(&mut self, p: Point);

    /// The search replay is over. Called exactly once per search run.
    fn on_run_complete(&mut self, algorithm: Algorithm, report: &RunReport);

    /// A maze wall was placed.
    fn on_wall_placed(&mut self, p: Point);

    /// The maze replay is over; `walls` cells were placed.
    fn on_maze_complete(&mut self, kind: MazeKind, walls: usize) {
        let _ = (kind, walls);
    }
}
