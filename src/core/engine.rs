use crate::core::game::{Game, GameOutcome};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Synchronous terminal loop: draw, wait for a key, hand it to the game.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        debug!("game screen created");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Some terminals report releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let quit = key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
            if quit {
                debug!("exit requested from keyboard");
                break;
            }

            if self.game.handle_input(key)? == GameOutcome::Exit {
                debug!("game requested exit");
                break;
            }
        }

        debug!("game screen destroyed");
        Ok(())
    }
}
