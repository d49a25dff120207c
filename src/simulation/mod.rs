pub mod engine;
pub mod strategy;

pub use engine::{
    evaluate_draft, run_simulation, run_trials, DraftResult, SimulationConfig, SimulationError,
    SimulationSummary, StrategyOutcome, TotalResults, DEFAULT_TRIALS,
};
pub use strategy::{Draft, DraftError, DraftStrategy, DrawN, DrawThreeTwice, StrategyKind};
