use crate::config::{CAPACITY, FIRST_PIECE_ID, PRELOAD_COUNT, SEED_ENV_VAR};
use crate::display::{render_queue, render_welcome};
use crate::generator::Generator;
use crate::menu::Session;
use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use log::info;
use std::io::{self, Write};

mod config;
mod display;
mod error;
mod generator;
mod menu;
mod queue;
mod structs;

#[derive(Debug, Parser)]
#[command(name = "tetris_stack", about = "Next-pieces queue simulator")]
struct Args {
    /// Seed for the piece generator. Omit for a different stream every run.
    #[arg(long, env = SEED_ENV_VAR)]
    seed: Option<u64>,

    /// Random pieces enqueued before the menu starts (at most the queue capacity).
    #[arg(
        long,
        default_value_t = PRELOAD_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=CAPACITY as u64)
    )]
    preload: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let generator = match args.seed {
        Some(seed) => {
            info!("seeding piece generator with {seed}");
            Generator::from_seed(seed)
        }
        None => Generator::from_entropy(),
    };
    let mut session = Session::new(generator);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    write!(output, "{}", render_welcome()).context("failed to write to stdout")?;
    session
        .preload(args.preload, &mut output)
        .context("failed to preload pieces")?;
    write!(output, "{}", render_queue(session.queue())).context("failed to write to stdout")?;

    session
        .run(&mut input, &mut output)
        .context("menu loop failed")?;
    info!(
        "session finished, {} pieces handed out",
        session.counter().peek() - FIRST_PIECE_ID
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preload_defaults_to_three() {
        let args = Args::try_parse_from(["tetris_stack"]).unwrap();
        assert_eq!(args.preload, PRELOAD_COUNT);
    }

    #[test]
    fn preload_accepts_up_to_capacity() {
        let args = Args::try_parse_from(["tetris_stack", "--preload", "10"]).unwrap();
        assert_eq!(args.preload, CAPACITY);
    }

    #[test]
    fn preload_above_capacity_is_rejected() {
        assert!(Args::try_parse_from(["tetris_stack", "--preload", "11"]).is_err());
        assert!(Args::try_parse_from(["tetris_stack", "--preload", "18446744073709551615"]).is_err());
    }
}
