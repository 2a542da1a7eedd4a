//! The run-to-completion state machine.
//!
//! A [`Visualizer`] owns the displayed grid. Starting a search or a maze runs
//! the whole computation up front and turns its output into a [`Timeline`]
//! of presentation events; the caller then drives time forward with
//! [`Visualizer::advance`] (or [`run_until_idle`](crate::run_until_idle)).
//! While a timeline is pending every input is rejected.

use std::time::{Duration, Instant};

use pathviz_core::{Grid, GridError, Point};
use pathviz_maze::{MazeGen, MazeKind};
use pathviz_paths::{Algorithm, RunResult};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::{ConfigError, VisualizerConfig};
use crate::presenter::Presenter;
use crate::report::{ResultsBoard, RunReport};
use crate::speed::Speed;
use crate::timeline::Timeline;

/// Whether a replay is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Idle,
    Running,
}

/// A scheduled presentation event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Explored(Point),
    OnPath(Point),
    RunComplete(RunReport),
    WallPlaced(Point),
    MazeComplete(MazeKind, usize),
}

/// Grid editor and replay scheduler.
pub struct Visualizer<R: Rng = StdRng> {
    blank: Grid,
    grid: Grid,
    speed: Speed,
    state: State,
    timeline: Timeline<Event>,
    clock: Duration,
    mazes: MazeGen<R>,
    results: ResultsBoard,
    painting: bool,
}

impl Visualizer<StdRng> {
    /// A visualizer whose mazes are seeded from the operating system.
    pub fn new(config: &VisualizerConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// A visualizer producing reproducible mazes.
    pub fn seeded(config: &VisualizerConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Visualizer<R> {
    pub fn with_rng(config: &VisualizerConfig, rng: R) -> Result<Self, ConfigError> {
        let blank = config.build_grid()?;
        Ok(Self {
            grid: blank.clone(),
            blank,
            speed: config.speed,
            state: State::Idle,
            timeline: Timeline::new(),
            clock: Duration::ZERO,
            mazes: MazeGen::new(rng),
            results: ResultsBoard::new(),
            painting: false,
        })
    }

    /// The grid as currently displayed, including replayed marks.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn results(&self) -> &ResultsBoard {
        &self.results
    }

    /// Time elapsed since the current (or last) replay started.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Number of events still scheduled.
    pub fn pending(&self) -> usize {
        self.timeline.len()
    }

    fn busy(&self, what: &str) -> bool {
        if self.is_running() {
            log::debug!("{what} ignored: replay in progress");
            return true;
        }
        false
    }

    /// Flip the wall at `p`, or set it to `forced`. Endpoints are left alone.
    ///
    /// Returns `Ok(false)` while a replay is running.
    pub fn edit_wall(&mut self, p: Point, forced: Option<bool>) -> Result<bool, GridError> {
        if self.busy("wall edit") {
            return Ok(false);
        }
        self.grid = self.grid.toggle_wall(p, forced)?;
        Ok(true)
    }

    /// Begin a drag stroke at `p`, toggling that cell.
    pub fn press_cell(&mut self, p: Point) -> Result<bool, GridError> {
        if self.busy("press") || self.grid.node(p)?.is_endpoint() {
            return Ok(false);
        }
        self.painting = true;
        self.edit_wall(p, None)
    }

    /// Toggle `p` if a drag stroke is in progress.
    pub fn hover_cell(&mut self, p: Point) -> Result<bool, GridError> {
        if !self.painting || self.busy("hover") || self.grid.node(p)?.is_endpoint() {
            return Ok(false);
        }
        self.edit_wall(p, None)
    }

    /// End the current drag stroke.
    pub fn release(&mut self) {
        self.painting = false;
    }

    pub fn set_speed(&mut self, speed: Speed) -> bool {
        if self.busy("speed change") {
            return false;
        }
        self.speed = speed;
        true
    }

    /// Clear search marks, keeping walls.
    pub fn reset_path(&mut self) -> bool {
        if self.busy("path reset") {
            return false;
        }
        self.grid = self.grid.reset_search_state();
        true
    }

    /// Restore the initial wall-free grid and forget all results.
    pub fn reset_grid(&mut self) -> bool {
        if self.busy("grid reset") {
            return false;
        }
        self.grid = self.blank.clone();
        self.results.clear();
        true
    }

    fn begin(&mut self) {
        self.timeline.clear();
        self.clock = Duration::ZERO;
        self.painting = false;
        self.state = State::Running;
    }

    /// Run `algorithm` to completion on a snapshot of the grid and schedule
    /// its replay.
    ///
    /// Explored cells fire every exploration delay from offset zero. When a
    /// path was found its cells follow, starting right after the last
    /// explored cell, every path delay; the report fires with the last path
    /// cell. Otherwise the report fires once exploration is over.
    pub fn start_search(&mut self, algorithm: Algorithm) -> Result<bool, GridError> {
        if self.busy("search") {
            return Ok(false);
        }
        self.grid = self.grid.reset_search_state();
        let mut snapshot = self.grid.clone();
        let (start, end) = (snapshot.start(), snapshot.end());

        let timer = Instant::now();
        let visited = algorithm.search(&mut snapshot, start, end)?;
        let execution_time = timer.elapsed();
        let result = RunResult::from_search(&mut snapshot, start, end, visited)?;

        let report = RunReport::new(algorithm, &result, execution_time, self.speed);
        log::debug!(
            "{algorithm}: scheduling {} explored and {} path cells at {}",
            report.visited_nodes,
            report.path_length,
            self.speed
        );

        self.begin();
        let explore = self.speed.exploration_delay();
        let step = self.speed.path_delay();
        for (i, &p) in result.visited.iter().enumerate() {
            self.timeline.push(explore * i as u32, Event::Explored(p));
        }
        let base = explore * result.visited.len() as u32;
        let mut done_at = base;
        if report.success {
            for (i, &p) in result.path.iter().enumerate() {
                done_at = base + step * i as u32;
                self.timeline.push(done_at, Event::OnPath(p));
            }
        }
        self.timeline.push(done_at, Event::RunComplete(report));
        Ok(true)
    }

    /// Clear the grid, generate a maze of `kind` and schedule its walls one
    /// per maze step. Results are forgotten.
    pub fn start_maze(&mut self, kind: MazeKind) -> bool {
        if self.busy("maze") {
            return false;
        }
        self.grid = self.blank.clone();
        self.results.clear();
        let plan = self.mazes.generate(kind, &self.grid);

        self.begin();
        for (i, &p) in plan.walls.iter().enumerate() {
            self.timeline.push(plan.offset(i), Event::WallPlaced(p));
        }
        let done_at = plan.offset(plan.len().saturating_sub(1));
        self.timeline.push(done_at, Event::MazeComplete(kind, plan.len()));
        true
    }

    /// Time until the next scheduled event, zero if it is already due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline
            .peek_offset()
            .map(|offset| offset.saturating_sub(self.clock))
    }

    /// Move the replay clock forward by `elapsed` and dispatch every event
    /// that became due. Returns the number of events dispatched.
    pub fn advance<P: Presenter + ?Sized>(&mut self, elapsed: Duration, presenter: &mut P) -> Result<usize, GridError> {
        if !self.is_running() {
            return Ok(0);
        }
        self.clock += elapsed;
        let mut n = 0;
        while let Some((_, event)) = self.timeline.pop_due(self.clock) {
            self.dispatch(event, presenter)?;
            n += 1;
        }
        Ok(n)
    }

    /// Dispatch every remaining event immediately.
    pub fn finish<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<usize, GridError> {
        let mut n = 0;
        while let Some((offset, event)) = self.timeline.pop() {
            self.clock = self.clock.max(offset);
            self.dispatch(event, presenter)?;
            n += 1;
        }
        Ok(n)
    }

    fn dispatch<P: Presenter + ?Sized>(&mut self, event: Event, presenter: &mut P) -> Result<(), GridError> {
        log::trace!("{:?} at {:?}", event, self.clock);
        match event {
            Event::Explored(p) => {
                self.grid.node_mut(p)?.is_visited = true;
                presenter.on_cell_explored(p);
            }
            Event::OnPath(p) => {
                self.grid.node_mut(p)?.is_path = true;
                presenter.on_cell_on_path(p);
            }
            Event::RunComplete(report) => {
                self.state = State::Idle;
                log::info!("{}: {}", report.algorithm, report);
                presenter.on_run_complete(report.algorithm, &report);
                self.results.record(report);
            }
            Event::WallPlaced(p) => {
                let node = self.grid.node_mut(p)?;
                if !node.is_endpoint() {
                    node.is_wall = true;
                }
                presenter.on_wall_placed(p);
            }
            Event::MazeComplete(kind, walls) => {
                self.state = State::Idle;
                log::info!("{kind} maze: {walls} walls");
                presenter.on_maze_complete(kind, walls);
            }
        }
        Ok(())
    }
}
