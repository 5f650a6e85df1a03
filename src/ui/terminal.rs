//! Crossterm-backed renderer. Owns the raw-mode alternate screen and the
//! backdrop, and restores the terminal on the way out.

use super::runner_scene::render_runner_scene;
use super::skyline::Skyline;
use crate::core::view::{FrameView, SceneRenderer, SessionState};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    skyline: Skyline,
    last_tick: Option<u64>,
}

impl TerminalRenderer {
    /// Switch to raw mode and the alternate screen. On failure the terminal
    /// is put back the way it was.
    pub fn enter(seed: u64) -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = undo_on_error(open_alternate_screen(), leave_terminal)?;
        Ok(Self {
            terminal,
            skyline: Skyline::new(seed),
            last_tick: None,
        })
    }

    pub fn restore(mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn open_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Best effort; the caller already has an error to report.
fn leave_terminal() {
    let _ = io::stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `cleanup` if `result` failed, then pass `result` through.
fn undo_on_error<T>(result: io::Result<T>, cleanup: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

impl SceneRenderer for TerminalRenderer {
    fn draw(&mut self, view: &FrameView) -> io::Result<()> {
        // Backdrop freezes with the street on game over
        if view.state == SessionState::Running && self.last_tick != Some(view.tick) {
            self.skyline.advance(view.game_speed);
            self.last_tick = Some(view.tick);
        }

        let skyline = &self.skyline;
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_runner_scene(frame, area, view, skyline);
        })?;
        Ok(())
    }
}
