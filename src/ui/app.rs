//! Main TUI application state and logic

use crate::error::VisualizerError;
use crate::playback::{PlaybackState, Visualizer};
use crate::ui::panes::{
    render_algorithm_list, render_bars_pane, render_info_pane, render_status_bar, BarsRenderData,
    InfoRenderData, SearchOutcome, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand_chacha::ChaCha8Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::io;
use std::time::{Duration, Instant};

/// Whether keystrokes drive playback or edit the search target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Editing the search target; holds the text typed so far
    Target(String),
}

/// The main application state
pub struct App {
    /// The playback session being displayed
    pub visualizer: Visualizer,

    /// Source of new random inputs
    pub rng: ChaCha8Rng,

    /// Length of generated inputs
    pub input_len: usize,

    pub input_mode: InputMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(visualizer: Visualizer, rng: ChaCha8Rng, input_len: usize) -> Self {
        App {
            visualizer,
            rng,
            input_len,
            input_mode: InputMode::Normal,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            if self.visualizer.poll(Instant::now())
                && self.visualizer.state() == PlaybackState::Finished
            {
                self.set_status("Visualization complete");
            }

            // Short poll timeout keeps ticks at the 50ms interval on time
            if event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn draw(&self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Algorithm list | visualization column
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Bar chart (top) | info (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(9)])
            .split(columns[1]);

        let viz = &self.visualizer;

        render_algorithm_list(frame, columns[0], viz.algorithm());

        let changed: FxHashSet<usize> = match (viz.current_snapshot(), viz.previous_snapshot()) {
            (Some(current), Some(previous)) if !viz.algorithm().is_search() => {
                current.changed_positions(previous).into_iter().collect()
            }
            _ => FxHashSet::default(),
        };
        let revealed = viz.recording().is_some() && viz.at_last_step();
        render_bars_pane(
            frame,
            right_rows[0],
            &BarsRenderData {
                values: viz.current_values(),
                changed,
                probe: viz.current_snapshot().and_then(|s| s.probe),
                found: viz.found().filter(|_| revealed),
                finalized: viz.finalized(),
            },
        );

        let (target_text, editing_target) = match &self.input_mode {
            InputMode::Target(buffer) => (buffer.as_str(), true),
            InputMode::Normal => (viz.target_text(), false),
        };
        let outcome = match (revealed, viz.found()) {
            (false, _) => SearchOutcome::Pending,
            (true, Some(index)) => SearchOutcome::Found(index),
            (true, None) => SearchOutcome::NotFound,
        };
        render_info_pane(
            frame,
            right_rows[1],
            &InfoRenderData {
                info: viz.algorithm().info(),
                target_text,
                editing_target,
                outcome,
            },
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                current_step: viz.position(),
                total_steps: viz.total_steps(),
                state: viz.state(),
                interval: viz.interval(),
                editing_target,
                is_search: viz.algorithm().is_search(),
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn report_error(&mut self, error: VisualizerError) {
        if error.is_validation() {
            tracing::warn!(%error, "command rejected");
        } else {
            tracing::error!(%error, "command failed");
        }
        self.status_message = error.to_string();
        self.status_is_error = true;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if let InputMode::Target(buffer) = &mut self.input_mode {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Enter => {
                    let text = std::mem::take(buffer);
                    self.input_mode = InputMode::Normal;
                    self.visualizer.set_target_text(text);
                    self.set_status("Search element set");
                }
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    self.set_status("Edit cancelled");
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                let since_last = now.saturating_duration_since(self.last_space_press);
                if since_last >= Duration::from_millis(200) {
                    self.last_space_press = now;
                    self.toggle_playback(now);
                }
            }
            KeyCode::Right => match self.visualizer.step_forward() {
                Ok(true) => self.set_status("Stepped forward"),
                Ok(false) => self.set_status("Already at the last step"),
                Err(e) => self.report_error(e),
            },
            KeyCode::Left => match self.visualizer.step_backward() {
                Ok(true) => self.set_status("Stepped backward"),
                Ok(false) => self.set_status("Already at the first step"),
                Err(e) => self.report_error(e),
            },
            KeyCode::Backspace | KeyCode::Home => match self.visualizer.jump_to_start() {
                Ok(()) => self.set_status("Jumped to start"),
                Err(e) => self.report_error(e),
            },
            KeyCode::End => match self.visualizer.jump_to_end() {
                Ok(()) => self.set_status("Jumped to end"),
                Err(e) => self.report_error(e),
            },
            KeyCode::Up => {
                let algorithm = self.visualizer.algorithm().prev();
                self.visualizer.select_algorithm(algorithm);
                self.set_status(format!("Selected {}", algorithm.name()));
            }
            KeyCode::Down => {
                let algorithm = self.visualizer.algorithm().next();
                self.visualizer.select_algorithm(algorithm);
                self.set_status(format!("Selected {}", algorithm.name()));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.visualizer.randomize(&mut self.rng, self.input_len);
                self.set_status("Generated random array");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.visualizer.faster();
                self.set_status(format!("Speed {}ms", self.visualizer.interval().as_millis()));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.visualizer.slower();
                self.set_status(format!("Speed {}ms", self.visualizer.interval().as_millis()));
            }
            KeyCode::Char('/') => {
                if self.visualizer.algorithm().is_search() {
                    self.visualizer.stop();
                    self.input_mode = InputMode::Target(self.visualizer.target_text().to_string());
                    self.set_status("Enter search element, then press Enter");
                } else {
                    self.set_status("Search element only applies to searches");
                }
            }
            _ => {}
        }
    }

    fn toggle_playback(&mut self, now: Instant) {
        match self.visualizer.toggle(now) {
            Ok(()) if self.visualizer.is_running() => self.set_status("Playing..."),
            Ok(()) => self.set_status("Paused"),
            Err(e) => self.report_error(e),
        }
    }
}
