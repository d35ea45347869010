//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Deterministic draws for TCG Sim save and replay.
#[derive(Debug, Parser)]
#[command(name = "tcgsim", version)]
#[command(about = "Draw from a seeded TCG Sim generator and print a replayable report")]
pub struct Cli {
    /// Seed for a fresh generator (0..=2147483647). Defaults to the clock.
    #[arg(long, env = "TCGSIM_SEED", conflicts_with = "snapshot")]
    pub seed: Option<u32>,

    /// JSON snapshot (`{"seed":..,"state":..}`) to resume from.
    #[arg(long, env = "TCGSIM_SNAPSHOT")]
    pub snapshot: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// The draw to perform.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Report the generator's seed without drawing.
    Seed,
    /// Roll integers in `[min, max]`.
    Roll {
        /// Lowest value.
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        /// Highest value.
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        /// Number of rolls.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Flip coins.
    Flip {
        /// Number of flips.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Flip until tails and count the heads.
    FlipUntilTails,
    /// Shuffle the given items.
    Shuffle {
        /// Items to shuffle.
        items: Vec<String>,
    },
    /// Pick one of the given items.
    Pick {
        /// Items to pick from.
        items: Vec<String>,
    },
    /// Pick `n` distinct items.
    PickN {
        /// How many to pick.
        #[arg(long)]
        n: usize,
        /// Items to pick from.
        items: Vec<String>,
    },
}

impl Command {
    /// Subcommand name, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Roll { .. } => "roll",
            Self::Flip { .. } => "flip",
            Self::FlipUntilTails => "flip-until-tails",
            Self::Shuffle { .. } => "shuffle",
            Self::Pick { .. } => "pick",
            Self::PickN { .. } => "pick-n",
        }
    }
}
