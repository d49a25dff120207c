use crate::simulation::{SimulationConfig, StrategyKind, DEFAULT_TRIALS};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "draft-synergy")]
#[command(about = "Pack synergy classifier and draft strategy simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Pack definitions (JSON)
    #[arg(short, long, default_value = "packs.json")]
    pub packs: String,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of drafts to simulate per strategy
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate how often each draft strategy finds a good pair (default)
    Simulate {
        /// Pack definitions (JSON)
        #[arg(short, long, default_value = "packs.json")]
        packs: String,

        /// Number of drafts to simulate per strategy
        #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
        trials: u64,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Strategy to run; repeat for several. Runs all when omitted
        #[arg(long = "strategy", value_enum)]
        strategies: Vec<StrategyKind>,

        /// Also save the summary to this file
        #[arg(short, long)]
        report: Option<String>,
    },

    /// Write the pairwise playability matrix as CSV
    Matrix {
        /// Pack definitions (JSON)
        #[arg(short, long, default_value = "packs.json")]
        packs: String,

        /// Output CSV file
        #[arg(short, long, default_value = "playability_matrix.csv")]
        output: String,
    },

    /// Classify a single pair of packs
    Pair {
        /// First pack (name or label)
        first: String,

        /// Second pack (name or label)
        second: String,

        /// Pack definitions (JSON)
        #[arg(short, long, default_value = "packs.json")]
        packs: String,
    },

    /// List the synergistic creature-type pairs
    Synergies {
        /// Pack definitions (JSON)
        #[arg(short, long, default_value = "packs.json")]
        packs: String,
    },
}

/// Resolve simulation settings; an empty strategy list means all of them
pub fn simulation_config(trials: u64, seed: Option<u64>, strategies: Vec<StrategyKind>) -> SimulationConfig {
    let strategies = if strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        strategies
    };
    SimulationConfig {
        trials,
        seed,
        strategies,
    }
}
