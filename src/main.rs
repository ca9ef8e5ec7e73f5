use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;

use klondike_engine::cli::{Args, Renderer, Session, SessionEnd};
use klondike_engine::Game;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let game = Game::new(args.config()).context("invalid game configuration")?;
    if let Some(seed) = game.seed() {
        log::info!("starting game with seed {}", seed);
    }

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_terminal();
    let mut session = Session::new(game, io::stdin().lock(), stdout.lock(), Renderer::new(color));

    let end = session.run().context("terminal I/O failed")?;
    log::info!("session ended: {:?} after {} pass(es)", end, session.game().passes());
    if let (SessionEnd::Stuck, Some(seed)) = (end, session.game().seed()) {
        log::debug!("replay with --seed {}", seed);
    }
    Ok(())
}
