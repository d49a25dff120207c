use crate::index::{IndexError, MatchIndex};
use crate::pack::{Pack, Playability};
use crate::rng::{DraftRng, RandomSource};
use crate::simulation::strategy::{Draft, DraftError, DraftStrategy, StrategyKind};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Trials per strategy when none is configured
pub const DEFAULT_TRIALS: u64 = 100_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Draft failed: {0}")]
    Draft(#[from] DraftError),
    #[error("Match index error: {0}")]
    Index(#[from] IndexError),
    #[error("Trial count must be at least 1")]
    NoTrials,
    #[error("No strategies selected")]
    NoStrategies,
}

/// Pair verdicts seen in a single draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftResult {
    pub strong: u32,
    pub medium: u32,
    pub weak: u32,
    pub unplayable: u32,
}

impl DraftResult {
    pub fn record(&mut self, verdict: Playability) {
        match verdict {
            Playability::Strong => self.strong += 1,
            Playability::Medium => self.medium += 1,
            Playability::Weak => self.weak += 1,
            Playability::Unplayable => self.unplayable += 1,
        }
    }

    /// Best verdict among the draft's pairs
    pub fn best(&self) -> Option<Playability> {
        if self.strong > 0 {
            Some(Playability::Strong)
        } else if self.medium > 0 {
            Some(Playability::Medium)
        } else if self.weak > 0 {
            Some(Playability::Weak)
        } else if self.unplayable > 0 {
            Some(Playability::Unplayable)
        } else {
            None
        }
    }

    pub fn total_pairs(&self) -> u32 {
        self.strong + self.medium + self.weak + self.unplayable
    }
}

/// Cumulative "at least this good" counts over many drafts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalResults {
    pub total_runs: u64,
    pub strong_or_better: u64,
    pub medium_or_better: u64,
    pub weak_or_better: u64,
    pub unplayable_or_better: u64,
}

impl TotalResults {
    pub fn record(&mut self, draft: &DraftResult) {
        self.total_runs += 1;
        let best = match draft.best() {
            Some(best) => best,
            None => return,
        };
        if best >= Playability::Strong {
            self.strong_or_better += 1;
        }
        if best >= Playability::Medium {
            self.medium_or_better += 1;
        }
        if best >= Playability::Weak {
            self.weak_or_better += 1;
        }
        self.unplayable_or_better += 1;
    }

    /// Number of drafts whose best pair was at least `verdict`
    pub fn or_better(&self, verdict: Playability) -> u64 {
        match verdict {
            Playability::Strong => self.strong_or_better,
            Playability::Medium => self.medium_or_better,
            Playability::Weak => self.weak_or_better,
            Playability::Unplayable => self.unplayable_or_better,
        }
    }

    /// Fraction of drafts whose best pair was at least `verdict`
    pub fn or_better_chance(&self, verdict: Playability) -> f64 {
        if self.total_runs == 0 {
            return 0.0;
        }
        self.or_better(verdict) as f64 / self.total_runs as f64
    }

    pub fn strong_or_better_chance(&self) -> f64 {
        self.or_better_chance(Playability::Strong)
    }

    pub fn medium_or_better_chance(&self) -> f64 {
        self.or_better_chance(Playability::Medium)
    }

    pub fn weak_or_better_chance(&self) -> f64 {
        self.or_better_chance(Playability::Weak)
    }

    pub fn unplayable_or_better_chance(&self) -> f64 {
        self.or_better_chance(Playability::Unplayable)
    }
}

/// Classify every pair a draft produced
pub fn evaluate_draft(draft: &Draft<'_>, index: &MatchIndex) -> Result<DraftResult, IndexError> {
    let mut result = DraftResult::default();
    for (first, second) in draft.pairs() {
        result.record(index.lookup(first, second)?);
    }
    trace!(pairs = result.total_pairs(), best = ?result.best(), "evaluated draft");
    Ok(result)
}

/// Run one strategy `trials` times against a prebuilt match index
pub fn run_trials(
    strategy: &dyn DraftStrategy,
    packs: &[Pack],
    index: &MatchIndex,
    trials: u64,
    rng: &mut dyn RandomSource,
) -> Result<TotalResults, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }
    strategy.check_pool(packs)?;
    debug!(strategy = strategy.name(), trials, "running strategy");

    let mut results = TotalResults::default();
    for _ in 0..trials {
        let draft = strategy.draft(packs, rng)?;
        let draft_result = evaluate_draft(&draft, index)?;
        results.record(&draft_result);
    }

    info!(
        strategy = strategy.name(),
        total_runs = results.total_runs,
        strong_or_better = results.strong_or_better,
        "strategy finished"
    );
    Ok(results)
}

/// Resolved settings for a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trials: u64,
    pub seed: Option<u64>,
    pub strategies: Vec<StrategyKind>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: DEFAULT_TRIALS,
            seed: None,
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.trials == 0 {
            return Err(SimulationError::NoTrials);
        }
        if self.strategies.is_empty() {
            return Err(SimulationError::NoStrategies);
        }
        Ok(())
    }
}

/// Results for one strategy within a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyOutcome {
    pub strategy: &'static str,
    pub results: TotalResults,
}

/// Results for every configured strategy, with the seed that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub seed: u64,
    pub trials: u64,
    pub outcomes: Vec<StrategyOutcome>,
}

/// Run every configured strategy in order, sharing one RNG stream.
///
/// `on_outcome` is called after each strategy completes.
pub fn run_simulation(
    config: &SimulationConfig,
    packs: &[Pack],
    index: &MatchIndex,
    mut on_outcome: impl FnMut(&StrategyOutcome),
) -> Result<SimulationSummary, SimulationError> {
    config.validate()?;
    let mut rng = DraftRng::new(config.seed);

    let mut outcomes = Vec::with_capacity(config.strategies.len());
    for kind in &config.strategies {
        let strategy = kind.strategy();
        let results = run_trials(strategy.as_ref(), packs, index, config.trials, &mut rng)?;
        let outcome = StrategyOutcome {
            strategy: strategy.name(),
            results,
        };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    Ok(SimulationSummary {
        seed: rng.seed(),
        trials: config.trials,
        outcomes,
    })
}
