use std::thread;

use pathviz_core::GridError;
use rand::Rng;

use crate::presenter::Presenter;
use crate::visualizer::Visualizer;

/// Play the pending replay in real time, sleeping until each event is due.
///
/// Returns the number of events dispatched. Does nothing when the visualizer
/// is idle.
pub fn run_until_idle<R, P>(vis: &mut Visualizer<R>, presenter: &mut P) -> Result<usize, GridError>
where
    R: Rng,
    P: Presenter + ?Sized,
{
    let mut dispatched = 0;
    while vis.is_running() {
        let Some(wait) = vis.next_deadline() else {
            break;
        };
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        dispatched += vis.advance(wait, presenter)?;
    }
    Ok(dispatched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RunReport, Speed, VisualizerConfig};
    use pathviz_core::Point;
    use pathviz_paths::Algorithm;
    use std::time::{Duration, Instant};

    struct Quiet;

    impl Presenter for Quiet {
        fn on_cell_explored(&mut self, _: Point) {}
        fn on_cell_on_path(&mut self, _: Point) {}
        fn on_run_complete(&mut self, _: Algorithm, _: &RunReport) {}
        fn on_wall_placed(&mut self, _: Point) {}
    }

    #[test]
    fn sleeps_through_the_whole_replay() {
        let cfg = VisualizerConfig {
            rows: 3,
            cols: 6,
            start: Point::new(1, 0),
            end: Point::new(1, 5),
            speed: Speed::Fast,
        };
        let mut v = Visualizer::seeded(&cfg, 0).unwrap();
        v.start_search(Algorithm::AStar).unwrap();
        let started = Instant::now();
        let n = run_until_idle(&mut v, &mut Quiet).unwrap();
        assert!(!v.is_running());
        let report = v.results().get(Algorithm::AStar).unwrap().clone();
        assert_eq!(n, report.visited_nodes + report.path_length + 1);
        // the last path cell fires one path step before the reported total
        let floor = report.visual_time - Speed::Fast.path_delay();
        assert!(started.elapsed() >= floor - Duration::from_millis(1));
    }

    #[test]
    fn idle_visualizer_returns_immediately() {
        let mut v = Visualizer::seeded(&VisualizerConfig::default(), 0).unwrap();
        assert_eq!(run_until_idle(&mut v, &mut Quiet).unwrap(), 0);
    }
}
