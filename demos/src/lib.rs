//! Terminal front end shared by the `pathviz` binary.
//!
//! [`TermPresenter`] streams replay events to a writer as they are
//! dispatched; [`render_board`] formats the per-algorithm results the way the
//! control panel shows them.

use std::io::{self, Write};

use pathviz_anim::{Presenter, ResultsBoard, RunReport};
use pathviz_core::Point;
use pathviz_maze::MazeKind;
use pathviz_paths::Algorithm;

/// Writes a progress line for every completed run or maze. Cell events are
/// only traced.
///
/// Presenter callbacks cannot fail, so the first write error is kept and
/// reported by [`TermPresenter::into_inner`].
pub struct TermPresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TermPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Write a full block of text, such as a rendered grid.
    pub fn show(&mut self, text: impl std::fmt::Display) {
        self.write_line(format_args!("{text}"));
    }

    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn write_line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{args}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Presenter for TermPresenter<W> {
    fn on_cell_explored(&mut self, p: Point) {
        log::trace!("explored {p}");
    }

    fn on_cell_on_path(&mut self, p: Point) {
        log::trace!("path {p}");
    }

    fn on_run_complete(&mut self, algorithm: Algorithm, report: &RunReport) {
        self.write_line(format_args!("{algorithm:>8}: {report}"));
    }

    fn on_wall_placed(&mut self, p: Point) {
        log::trace!("wall {p}");
    }

    fn on_maze_complete(&mut self, kind: MazeKind, walls: usize) {
        self.write_line(format_args!("{kind:>8}: {walls} walls"));
    }
}

/// One line per algorithm, `-` for algorithms without a result.
pub fn render_board(board: &ResultsBoard) -> String {
    Algorithm::ALL
        .iter()
        .map(|&algo| match board.get(algo) {
            Some(report) => format!("{algo:>8}: {report}"),
            None => format!("{algo:>8}: -"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
