extern crate hunterbot;

use std::{io, process};

use hunterbot::{input::TurnReader, strategy::Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // stdout belongs to the referee, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let strategy = Strategy::default();
    let mut reader = TurnReader::new(io::stdin().lock());

    // game loop
    loop {
        let world = match reader.read_turn() {
            Ok(Some(world)) => world,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("failed to read turn: {e}");
                process::exit(1);
            }
        };

        if let Err(e) = strategy.play(&world) {
            tracing::error!("no action for turn {}: {e}", world.iter);
            process::exit(1);
        }
    }
}
