//! Keyboard input: crossterm key events to runner actions.

use crate::core::game_loop::InputSource;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,  // Space or Up arrow (restart after a crash)
    Quit,  // Esc, q or Ctrl-C
    Other, // Anything else, ignored
}

impl RunnerInput {
    pub fn from_key(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return RunnerInput::Quit;
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Up => RunnerInput::Jump,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => RunnerInput::Quit,
            _ => RunnerInput::Other,
        }
    }
}

/// Reads pending terminal events without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn drain(&mut self) -> io::Result<Vec<RunnerInput>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            // Raw mode reports releases on some platforms; only presses count
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    inputs.push(RunnerInput::from_key(key));
                }
            }
        }
        Ok(inputs)
    }
}
