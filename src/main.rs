use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_rules::config::AppConfig;
use connect_four_rules::game::GameState;
use connect_four_rules::render;

/// Play a game of Connect Four between two random players and print every
/// position.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play a random game of Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Seed for random move selection
    #[arg(long)]
    seed: Option<u64>,

    /// Keep only the latest snapshot instead of the full history
    #[arg(long)]
    no_history: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.dump_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        app_config.game.cols = cols;
    }
    if cli.seed.is_some() {
        app_config.game.seed = cli.seed;
    }
    if cli.no_history {
        app_config.game.save_history = false;
    }
    app_config
        .validate()
        .context("validating command line overrides")?;

    run(GameState::new(&app_config.game))
}

fn run(mut game: GameState) -> Result<()> {
    println!("{}", render::render_current(&game));
    let mut round = 0;
    while !game.legal_plays().is_empty() {
        game.play(None).context("playing random move")?;
        round += 1;
        println!("------");
        println!("ROUND NUMBER {round}");
        if let Some(winner) = game.winner() {
            println!("WINNER {}", winner.display());
        }
        println!("{}", render::render_current(&game));
    }
    if game.is_draw() {
        println!("DRAW");
    }
    Ok(())
}
