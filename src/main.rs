//! Headless runner: loads the default board, simulates a fixed number of ticks, and
//! prints the board now and then.

use anyhow::Context;
use tracing::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pacman::config::SimulationConfig;
use pacman::constants::RAW_BOARD;
use pacman::entity::strategy::{GhostStrategy, Strategy};
use pacman::formatter::{self, TickFormatter};
use pacman::game::PacmanGame;
use pacman::level::Level;
use pacman::map::render::MapRenderer;
use pacman::map::GameMap;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().event_format(TickFormatter))
        .with(ErrorLayer::default())
        .try_init()
        .context("Could not set global tracing subscriber")?;

    let config = SimulationConfig::from_env().context("Invalid simulation settings")?;
    info!(?config, "Starting simulation");

    let map = GameMap::parse(&RAW_BOARD).context("Default board is invalid")?;
    let level = Level::new(1, map);
    let mut game = match config.seed {
        Some(seed) => PacmanGame::seeded(level, seed),
        None => PacmanGame::new(level),
    }
    .context("Could not set up the game")?;

    for _ in 0..config.ticks {
        game.tick(config.tick);
        formatter::set_tick_count(game.ticks());

        if config.render_every != 0 && game.ticks() % config.render_every == 0 {
            print_board(&game);
        }

        if game.is_player_caught() {
            warn!(tick = game.ticks(), elapsed = ?game.elapsed(), "Player caught");
            print_board(&game);
            break;
        }
    }

    info!(ticks = game.ticks(), elapsed = ?game.elapsed(), "Simulation finished");
    Ok(())
}

fn print_board(game: &PacmanGame) {
    let ghosts: Vec<_> = game.ghosts().iter().map(|ghost| ghost.cell()).collect();
    for row in MapRenderer::render_rows(game.map(), game.player_position(), &ghosts) {
        println!("{row}");
    }
    for (ghost, letter) in game.ghosts().iter().zip('A'..='Z') {
        let strategy = match ghost.strategy() {
            Strategy::ChaseRandom(composite) => composite.active().name(),
            other => other.name(),
        };
        println!("{letter}: {:<6} {:?} [{strategy}]", ghost.kind().as_str(), ghost.cell());
    }
    println!();
}
