pub mod error;
pub mod game;
pub mod pool;
pub mod renderer;
pub mod round;
pub mod scramble;

pub use error::{ConfigError, RoundError};
pub use game::UnscrambleGame;
pub use pool::WordPool;
pub use round::{AdvanceResult, GuessResult, RoundEngine, RoundSnapshot, RoundStatus};
pub use scramble::scramble;
