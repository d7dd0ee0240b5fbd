pub mod cli;

pub mod core {
	pub mod config;
	pub mod engine;
	pub mod game;
	pub mod renderer;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::{Game, GameOutcome};
