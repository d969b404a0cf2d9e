// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handplay terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};

use handplay_core::{Config, Session};

pub mod input;
pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for shuffling the decks, a random seed is used if not set.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of cards in the hand.
    #[clap(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(5..=12))]
    hand_size: u8,
    /// Number of hands that can be played in a round.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    plays: u8,
    /// Number of discard actions in a round.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=10))]
    discards: u8,
    /// Maximum number of cards for a discard action.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    max_discards: u8,
    /// Logs verbosity, repeat for debug logs.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config {
        hand_size: cli.hand_size as usize,
        plays_per_round: cli.plays as u32,
        discards_per_round: cli.discards as u32,
        max_discards: cli.max_discards as usize,
    };

    info!("Starting game with {config:?}");

    let mut session = match cli.seed {
        Some(seed) => Session::with_rng(config, StdRng::seed_from_u64(seed)),
        None => Session::new(config),
    };

    terminal::run(&mut session)
}
