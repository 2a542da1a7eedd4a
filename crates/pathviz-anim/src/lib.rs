//! Timed replay for the pathfinding visualizer.
//!
//! Searches and maze generators run synchronously; this crate turns their
//! output into a schedule of presentation events and enforces that only one
//! replay runs at a time.
//!
//! ```no_run
//! use pathviz_anim::{Visualizer, VisualizerConfig, run_until_idle};
//! # fn demo(presenter: &mut impl pathviz_anim::Presenter) -> Result<(), Box<dyn std::error::Error>> {
//! let mut vis = Visualizer::new(&VisualizerConfig::default())?;
//! vis.start_maze(pathviz_maze::MazeKind::Recursive);
//! run_until_idle(&mut vis, presenter)?;
//! vis.start_search(pathviz_paths::Algorithm::AStar)?;
//! run_until_idle(&mut vis, presenter)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod driver;
mod presenter;
mod report;
mod speed;
mod timeline;
mod visualizer;

pub use config::{ConfigError, VisualizerConfig};
pub use driver::run_until_idle;
pub use presenter::Presenter;
pub use report::{ResultsBoard, RunReport};
pub use speed::{Speed, UnknownSpeed};
pub use timeline::Timeline;
pub use visualizer::{Event, State, Visualizer};
