use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use super::error::ConfigError;
use super::renderer::UnscrambleRenderer;
use super::round::{RoundEngine, RoundSnapshot, RoundStatus};
use crate::core::config::GameConfig;
use crate::core::renderer::GameRenderer;
use crate::{Game, GameOutcome};

/// The playing screen: owns the round and the text the player is typing.
pub struct UnscrambleGame {
    round: RoundEngine,
    input: String,
    show_error: bool,
}

impl UnscrambleGame {
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let words = config.word_pool.iter();
        let round = match seed {
            Some(seed) => RoundEngine::initialize_with_seed(
                words,
                config.max_words,
                config.score_increment,
                seed,
            )?,
            None => RoundEngine::initialize(words, config.max_words, config.score_increment)?,
        };
        Ok(Self::from_round(round))
    }

    pub fn from_round(round: RoundEngine) -> Self {
        Self { round, input: String::new(), show_error: false }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the last submitted guess was wrong and is still on screen.
    pub fn show_error(&self) -> bool {
        self.show_error
    }

    pub fn is_round_over(&self) -> bool {
        self.round.status() == RoundStatus::Finished
    }

    /// Checks the typed word; a correct one moves straight to the next word.
    pub fn submit(&mut self) -> Result<()> {
        if self.round.submit_guess(&self.input)?.correct {
            self.clear_input();
            self.advance()?;
        } else {
            self.show_error = true;
        }
        Ok(())
    }

    /// Moves on without scoring.
    pub fn skip(&mut self) -> Result<()> {
        self.clear_input();
        self.advance()
    }

    pub fn restart(&mut self) {
        self.round.reinitialize();
        self.clear_input();
    }

    fn advance(&mut self) -> Result<()> {
        if self.round.next_word()?.finished {
            info!(score = self.round.score(), "showing final score");
        }
        Ok(())
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.show_error = false;
    }

    fn handle_summary_key(&mut self, key: KeyEvent) -> GameOutcome {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => {
                self.restart();
                GameOutcome::Continue
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                info!(score = self.round.score(), "player exited from summary");
                GameOutcome::Exit
            }
            _ => GameOutcome::Continue,
        }
    }
}

impl Game for UnscrambleGame {
    fn handle_input(&mut self, key: KeyEvent) -> Result<GameOutcome> {
        if self.is_round_over() {
            return Ok(self.handle_summary_key(key));
        }

        match key.code {
            KeyCode::Enter => self.submit()?,
            KeyCode::Tab => self.skip()?,
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
        Ok(GameOutcome::Continue)
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        UnscrambleRenderer::render(frame, self);
    }
}
