use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::config::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "unscramble")]
#[command(about = "🔤 Unscramble the word before the round runs out")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON config file (word_pool, max_words, score_increment)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Words per round, overrides the config file
    #[arg(short = 'n', long)]
    pub max_words: Option<u32>,

    /// Points per correct guess, overrides the config file
    #[arg(long)]
    pub score_increment: Option<u32>,

    /// Seed for a reproducible word order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play a round (default)
    Play,
    /// List the words in the configured pool
    Words,
    /// Print the effective configuration as JSON
    Config,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn game_config(&self) -> Result<GameConfig> {
        let cfg = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        Ok(cfg.with_overrides(self.max_words, self.score_increment))
    }
}
