//! Event-driven owner of the live grid
//!
//! The display driver feeds one [`Event`] at a time into [`Controller::handle`]
//! and draws the [`Snapshot`] afterwards.

use crate::config::Density;
use crate::life::{self, Cell, Grid, GridResult};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;

/// Everything the display driver can report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    DisplayResized { width: usize, height: usize },
    Tick,
    ToggleCell { row: isize, col: isize },
    Reseed,
    Quit,
}

/// Whether the driver should keep delivering events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Controller<R = StdRng> {
    grid: Grid,
    started: bool,
    finished: bool,
    density: Density,
    rng: R,
}

impl<R: Rng> Controller<R> {
    pub fn new(wrap: bool, density: Density, rng: R) -> Self {
        Self {
            grid: Grid::empty(wrap),
            started: false,
            finished: false,
            density,
            rng,
        }
    }

    /// Whether a dimension report has arrived yet
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Process one event to completion
    pub fn handle(&mut self, event: Event) -> Flow {
        if self.finished {
            return Flow::Quit;
        }

        match event {
            Event::DisplayResized { width, height } => self.resize(width, height),
            Event::Tick => self.grid = life::advance(&self.grid),
            Event::ToggleCell { row, col } => self.toggle(row, col),
            Event::Reseed => {
                debug!("reseeding {}x{} grid", self.grid.width(), self.grid.height());
                life::seed(&mut self.grid, self.density, &mut self.rng);
            }
            Event::Quit => {
                self.finished = true;
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { grid: &self.grid }
    }

    // Every resize discards the current pattern; cropping is not attempted.
    fn resize(&mut self, width: usize, height: usize) {
        self.grid = self.grid.resized(width, height);
        if self.started {
            warn!("display resized to {}x{}: previous pattern discarded and reseeded", width, height);
        } else {
            self.started = true;
        }
        life::seed(&mut self.grid, self.density, &mut self.rng);
    }

    // Pointer events can be stale after a resize, so misses are dropped.
    fn toggle(&mut self, row: isize, col: isize) {
        if !self.grid.contains(row, col) {
            debug!("ignoring toggle at ({}, {}) outside {}x{} grid", row, col, self.grid.width(), self.grid.height());
            return;
        }
        if let Err(err) = self.flip(row, col) {
            debug!("ignoring toggle: {}", err);
        }
    }

    fn flip(&mut self, row: isize, col: isize) -> GridResult<()> {
        let cell = self.grid.get(row, col)?;
        self.grid.set(row, col, cell.toggled())
    }
}

/// Read-only view of the grid for rendering
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
}

impl<'a> Snapshot<'a> {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.grid.cells()
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// One slice per row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        let cells = self.grid.cells();
        let width = self.grid.width();
        (0..self.grid.height()).map(move |row| &cells[row * width..(row + 1) * width])
    }

    /// One glyph per cell, one line per row
    pub fn to_text(&self, alive: char, dead: char) -> String {
        let mut frame = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows() {
            frame.extend(row.iter().map(|c| if c.is_alive() { alive } else { dead }));
            frame.push('\n');
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn full() -> Density {
        Density::new(1.0).unwrap()
    }

    fn controller(wrap: bool, density: Density) -> Controller {
        Controller::new(wrap, density, StdRng::seed_from_u64(99))
    }

    #[test]
    fn starts_empty_until_first_resize() {
        let mut ctl = controller(false, full());
        assert!(!ctl.is_started());
        assert_eq!(ctl.handle(Event::Tick), Flow::Continue);
        assert_eq!(ctl.snapshot().cells().len(), 0);

        ctl.handle(Event::DisplayResized { width: 6, height: 4 });
        assert!(ctl.is_started());
        let snap = ctl.snapshot();
        assert_eq!((snap.width(), snap.height()), (6, 4));
        assert_eq!(snap.live_count(), 24);
    }

    #[test]
    fn later_resize_reallocates_and_reseeds() {
        let mut ctl = controller(true, full());
        ctl.handle(Event::DisplayResized { width: 4, height: 4 });
        ctl.handle(Event::ToggleCell { row: 0, col: 0 });
        assert_eq!(ctl.snapshot().live_count(), 15);

        ctl.handle(Event::DisplayResized { width: 2, height: 3 });
        let snap = ctl.snapshot();
        assert_eq!((snap.width(), snap.height()), (2, 3));
        assert_eq!(snap.live_count(), 6);
    }

    #[test]
    fn toggle_flips_in_range_cell() {
        let mut ctl = controller(false, full());
        ctl.handle(Event::DisplayResized { width: 3, height: 2 });
        ctl.handle(Event::ToggleCell { row: 1, col: 2 });
        assert_eq!(ctl.snapshot().to_text('#', '.'), "###\n##.\n");
        ctl.handle(Event::ToggleCell { row: 1, col: 2 });
        assert_eq!(ctl.snapshot().live_count(), 6);
    }

    #[test]
    fn stale_toggle_after_shrink_is_ignored() {
        for wrap in [false, true] {
            let mut ctl = controller(wrap, full());
            ctl.handle(Event::DisplayResized { width: 10, height: 10 });
            ctl.handle(Event::DisplayResized { width: 4, height: 3 });

            assert_eq!(ctl.handle(Event::ToggleCell { row: 8, col: 9 }), Flow::Continue);
            assert_eq!(ctl.handle(Event::ToggleCell { row: -1, col: 0 }), Flow::Continue);
            assert_eq!(ctl.snapshot().live_count(), 12, "wrap = {wrap}");
        }
    }

    #[test]
    fn toggle_before_first_resize_is_ignored() {
        let mut ctl = controller(true, full());
        assert_eq!(ctl.handle(Event::ToggleCell { row: 0, col: 0 }), Flow::Continue);
        assert_eq!(ctl.snapshot().cells().len(), 0);
    }

    #[test]
    fn tick_advances_one_generation() {
        let mut ctl = controller(false, full());
        ctl.handle(Event::DisplayResized { width: 3, height: 3 });
        ctl.handle(Event::Tick);
        assert_eq!(ctl.snapshot().to_text('#', ' '), "# #\n   \n# #\n");
    }

    #[test]
    fn reseed_keeps_dimensions() {
        let mut ctl = controller(false, full());
        ctl.handle(Event::DisplayResized { width: 5, height: 2 });
        ctl.handle(Event::ToggleCell { row: 0, col: 0 });
        ctl.handle(Event::Reseed);
        let snap = ctl.snapshot();
        assert_eq!((snap.width(), snap.height()), (5, 2));
        assert_eq!(snap.live_count(), 10);
    }

    #[test]
    fn quit_is_terminal() {
        let mut ctl = controller(false, full());
        ctl.handle(Event::DisplayResized { width: 3, height: 3 });
        assert_eq!(ctl.handle(Event::Quit), Flow::Quit);
        assert_eq!(ctl.handle(Event::Tick), Flow::Quit);
        assert_eq!(ctl.handle(Event::ToggleCell { row: 0, col: 0 }), Flow::Quit);
        assert_eq!(ctl.snapshot().live_count(), 9);
    }

    #[test]
    fn snapshot_rows_cover_zero_width() {
        let mut ctl = controller(false, full());
        ctl.handle(Event::DisplayResized { width: 0, height: 2 });
        assert_eq!(ctl.snapshot().rows().count(), 2);
        assert_eq!(ctl.snapshot().to_text('#', ' '), "\n\n");
    }

    #[test]
    fn seeded_controllers_agree() {
        let density = Density::new(0.4).unwrap();
        let mut a = controller(true, density);
        let mut b = controller(true, density);
        for ctl in [&mut a, &mut b] {
            ctl.handle(Event::DisplayResized { width: 30, height: 20 });
            for _ in 0..10 {
                ctl.handle(Event::Tick);
            }
        }
        assert_eq!(a.snapshot().to_text('#', '.'), b.snapshot().to_text('#', '.'));
    }

    #[test]
    fn large_grid_runs_many_generations() {
        let mut ctl = controller(false, Density::default());
        ctl.handle(Event::DisplayResized { width: 100, height: 100 });
        for _ in 0..50 {
            ctl.handle(Event::Tick);
        }
        let snap = ctl.snapshot();
        assert_eq!(snap.cells().len(), 10_000);
        assert_eq!(snap.rows().count(), 100);
    }
}
