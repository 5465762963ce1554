// src/ui/prompt.rs

//! Terminal session: raw-mode setup and teardown plus the synchronous event
//! loop that feeds key presses into the prompt state machine.

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::engine::config::PromptConfig;
use crate::engine::key::KeyPress;
use crate::engine::state::{PromptState, Step};
use crate::ui::render;

/// How a prompt session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome<V> {
    /// The user confirmed; values are in their final order.
    Submitted(Vec<V>),
    /// The user bailed out with Esc, `q` or ctrl-c.
    Cancelled,
}

struct TerminalGuard(Terminal<CrosstermBackend<Stdout>>);

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal(&mut self.0);
    }
}

/// Runs the interactive prompt to completion and prints the summary line.
///
/// Configuration errors (empty choices, nothing selectable) surface here,
/// before the terminal is touched.
pub fn run_prompt<V: Clone>(config: &PromptConfig<V>) -> Result<PromptOutcome<V>> {
    let mut state = PromptState::new(config)?;

    let terminal = setup_terminal()?;
    let mut guard = TerminalGuard(terminal);
    drain_input_buffer()?;

    let outcome = run_event_loop(&mut guard.0, &mut state, config)?;
    drop(guard);

    if matches!(outcome, PromptOutcome::Submitted(_)) {
        println!("{}", render::summary(&state, config));
    }
    Ok(outcome)
}

fn run_event_loop<V: Clone>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut PromptState<V>,
    config: &PromptConfig<V>,
) -> Result<PromptOutcome<V>> {
    loop {
        terminal.draw(|frame| render::draw(frame, state, config))?;
        if event::poll(Duration::from_millis(250))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Esc
                || key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                debug!("prompt cancelled");
                return Ok(PromptOutcome::Cancelled);
            }
            if let Step::Submitted(values) = state.handle_key(&KeyPress::from(key), config) {
                return Ok(PromptOutcome::Submitted(values));
            }
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Discards any keys typed before the prompt took over the terminal.
fn drain_input_buffer() -> Result<()> {
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
