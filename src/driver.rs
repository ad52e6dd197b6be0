//! Terminal front end: turns crossterm input and a timer into controller
//! events and draws each snapshot.

use crate::config::{LifeConfig, PrintConfig};
use crate::controller::{Controller, Event, Flow};
use crate::help::render_help_overlay;
use crate::terminal::Terminal;
use crossterm::event::{
    Event as Input, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::style::Color;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const HELP_TEXT: &str = "\
GAME OF LIFE
click  Toggle cell
r      Reseed (also Ctrl+R)
space  Pause / resume
0-9    Tick speed
?      Close help
q      Quit (also Esc, Ctrl+C)";

const ALIVE_COLOR: Color = Color::Green;

/// Display-side state that never reaches the grid
struct DriverState {
    speed: f32, // Seconds per tick
    paused: bool,
    show_help: bool,
}

impl DriverState {
    fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            paused: false,
            show_help: false,
        }
    }

    fn period(&self) -> Duration {
        Duration::from_secs_f32(self.speed.max(0.001).min(60.0))
    }

    /// Map terminal input to a controller event, handling display-only keys here
    fn translate(&mut self, input: Input) -> Option<Event> {
        match input {
            Input::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Input::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Event::ToggleCell {
                row: row as isize,
                col: column as isize,
            }),
            Input::Resize(width, height) => Some(Event::DisplayResized {
                width: width as usize,
                height: height as usize,
            }),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Event> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(Event::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Event::Quit),
            KeyCode::Char('r') => Some(Event::Reseed),
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                None
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                None
            }
            KeyCode::Char(c) => {
                // 1=fastest, 9=slowest, 0=very slow
                self.speed = match c.to_digit(10)? {
                    1 => 0.02,
                    2 => 0.03,
                    3 => 0.05,
                    4 => 0.07,
                    5 => 0.1,
                    6 => 0.125,
                    7 => 0.15,
                    8 => 0.2,
                    9 => 0.3,
                    _ => 0.5,
                };
                None
            }
            _ => None,
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Run the interactive simulation until the user quits
pub fn run(config: &LifeConfig) -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut controller = Controller::new(config.wrap, config.density, make_rng(config.seed));
    let mut state = DriverState::new(config.time_step);
    let mut generations = 0u64;

    let (w, h) = term.size();
    controller.handle(Event::DisplayResized {
        width: w as usize,
        height: h as usize,
    });
    let mut next_tick = Instant::now() + state.period();

    loop {
        draw(&mut term, &controller, config, state.show_help)?;

        let wait = next_tick.saturating_duration_since(Instant::now());
        if let Some(input) = term.poll_event(wait)? {
            if let Input::Resize(width, height) = input {
                term.resize(width, height);
                term.clear_screen()?;
            }
            if let Some(event) = state.translate(input) {
                if controller.handle(event) == Flow::Quit {
                    break;
                }
            }
        }

        // Input can arrive faster than the tick period, so check the deadline every pass
        if Instant::now() >= next_tick {
            next_tick = Instant::now() + state.period();
            if !state.paused && controller.is_started() {
                controller.handle(Event::Tick);
                generations += 1;
            }
        }
    }

    drop(term);
    info!(
        "quit after {} generations with {} live cells",
        generations,
        controller.snapshot().live_count()
    );
    Ok(())
}

fn draw(term: &mut Terminal, controller: &Controller, config: &LifeConfig, show_help: bool) -> io::Result<()> {
    let snapshot = controller.snapshot();
    let width = snapshot.width().max(1);

    term.clear();
    for (idx, cell) in snapshot.cells().iter().enumerate() {
        let (x, y) = ((idx % width) as i32, (idx / width) as i32);
        if cell.is_alive() {
            term.set(x, y, config.alive_char, Some(ALIVE_COLOR));
        } else if config.dead_char != ' ' {
            term.set(x, y, config.dead_char, None);
        }
    }

    if show_help {
        render_help_overlay(term, HELP_TEXT);
    }
    term.render()
}

/// Simulate without a display and print the final frame to stdout
pub fn print(config: &LifeConfig, opts: PrintConfig) -> io::Result<()> {
    let mut controller = Controller::new(config.wrap, config.density, make_rng(config.seed));
    controller.handle(Event::DisplayResized {
        width: opts.width,
        height: opts.height,
    });
    for _ in 0..opts.generations {
        controller.handle(Event::Tick);
    }

    let frame = controller.snapshot().to_text(config.alive_char, config.dead_char);
    let mut out = io::stdout().lock();
    out.write_all(frame.as_bytes())?;
    out.flush()
}
