/// Core game interface driven by the terminal loop
use anyhow::Result;
use crossterm::event::KeyEvent;

/// What the loop should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Continue,
    Exit,
}

/// Main game trait: a single-player screen that reacts to keys and draws itself.
/// All calls happen on the terminal loop's thread, one key at a time.
pub trait Game {
    /// Handle one key press (Esc and Ctrl-C are handled by the loop)
    fn handle_input(&mut self, key: KeyEvent) -> Result<GameOutcome>;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);
}
