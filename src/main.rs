use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::sync::Mutex;
use unscramble::cli::{Cli, Commands};
use unscramble::core::engine::Engine;
use unscramble::games::{self, unscramble::UnscrambleGame};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = cli.game_config()?;

    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Words => {
            println!("📦 {} words in pool:", config.word_pool.len());
            for word in &config.word_pool {
                println!("   {}", word);
            }
            Ok(())
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Play => {
            let game = UnscrambleGame::new(&config, cli.seed)
                .context("invalid game configuration")?;
            tracing::info!(game = games::UNSCRAMBLE.id, max_words = config.max_words, "starting");

            let terminal = ratatui::init();
            let result = Engine::new(game).run(terminal);
            ratatui::restore();
            result
        }
    }
}

/// Logs go to `--log-file` only; without it tracing stays off.
fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("creating log file '{}'", path.display()))?;
    let log_filter = if cli.debug { "debug" } else { "unscramble=info,warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(cli.debug)
        .init();
    Ok(())
}
