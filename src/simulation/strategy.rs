use crate::pack::Pack;
use crate::rng::{sample_indices, RandomSource};
use clap::ValueEnum;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{strategy} needs at least {required} packs, only {available} available")]
    NotEnoughPacks {
        strategy: &'static str,
        required: usize,
        available: usize,
    },
    #[error("Draw size must be between {min} and {max}, got {0}", min = DrawN::MIN, max = DrawN::MAX)]
    UnsupportedDrawCount(usize),
}

/// Outcome of one simulated draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft<'a> {
    /// Packs drafted together; every pair among them counts
    Flat(Vec<&'a Pack>),
    /// One kept pack plus later options; only anchor pairings count
    AnchorRest { anchor: &'a Pack, rest: Vec<&'a Pack> },
}

impl<'a> Draft<'a> {
    /// Pairs that get evaluated for this draft
    pub fn pairs(&self) -> Vec<(&'a Pack, &'a Pack)> {
        match self {
            Draft::Flat(packs) => {
                let mut pairs = Vec::with_capacity(packs.len() * packs.len().saturating_sub(1) / 2);
                for (i, first) in packs.iter().enumerate() {
                    for second in &packs[i + 1..] {
                        pairs.push((*first, *second));
                    }
                }
                pairs
            }
            Draft::AnchorRest { anchor, rest } => rest.iter().map(|other| (*anchor, *other)).collect(),
        }
    }

    /// Every pack that appears in the draft
    pub fn packs(&self) -> Vec<&'a Pack> {
        match self {
            Draft::Flat(packs) => packs.clone(),
            Draft::AnchorRest { anchor, rest } => {
                let mut packs = Vec::with_capacity(rest.len() + 1);
                packs.push(*anchor);
                packs.extend(rest.iter().copied());
                packs
            }
        }
    }
}

/// A policy for picking packs in one simulated draft
pub trait DraftStrategy {
    fn name(&self) -> &'static str;

    /// Smallest collection this strategy can draft from
    fn min_packs(&self) -> usize;

    fn draft<'a>(&self, packs: &'a [Pack], rng: &mut dyn RandomSource) -> Result<Draft<'a>, DraftError>;

    fn check_pool(&self, packs: &[Pack]) -> Result<(), DraftError> {
        if packs.len() < self.min_packs() {
            return Err(DraftError::NotEnoughPacks {
                strategy: self.name(),
                required: self.min_packs(),
                available: packs.len(),
            });
        }
        Ok(())
    }
}

/// Draw `count` distinct packs and keep them all, for `count` in 3..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawN {
    count: usize,
}

impl DrawN {
    pub const MIN: usize = 3;
    pub const MAX: usize = 6;

    pub fn new(count: usize) -> Result<Self, DraftError> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(DraftError::UnsupportedDrawCount(count));
        }
        Ok(DrawN { count })
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl DraftStrategy for DrawN {
    fn name(&self) -> &'static str {
        match self.count {
            3 => "Draw Three",
            4 => "Draw Four",
            5 => "Draw Five",
            _ => "Draw Six",
        }
    }

    fn min_packs(&self) -> usize {
        self.count
    }

    fn draft<'a>(&self, packs: &'a [Pack], rng: &mut dyn RandomSource) -> Result<Draft<'a>, DraftError> {
        self.check_pool(packs)?;
        let picked = sample_indices(rng, packs.len(), self.count)
            .into_iter()
            .map(|i| &packs[i])
            .collect();
        Ok(Draft::Flat(picked))
    }
}

/// Draw three and keep one, then draw three more from what is left
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawThreeTwice;

impl DraftStrategy for DrawThreeTwice {
    fn name(&self) -> &'static str {
        "Draw Three Twice"
    }

    fn min_packs(&self) -> usize {
        6
    }

    fn draft<'a>(&self, packs: &'a [Pack], rng: &mut dyn RandomSource) -> Result<Draft<'a>, DraftError> {
        self.check_pool(packs)?;

        let first_three = sample_indices(rng, packs.len(), 3);
        let anchor = first_three[rng.random_range(first_three.len())];

        let remaining: Vec<usize> = (0..packs.len())
            .filter(|i| !first_three.contains(i))
            .collect();
        let rest = sample_indices(rng, remaining.len(), 3)
            .into_iter()
            .map(|i| &packs[remaining[i]])
            .collect();

        Ok(Draft::AnchorRest {
            anchor: &packs[anchor],
            rest,
        })
    }
}

/// Named strategies selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StrategyKind {
    DrawThree,
    DrawFour,
    DrawFive,
    DrawSix,
    DrawThreeTwice,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::DrawThree,
        StrategyKind::DrawFour,
        StrategyKind::DrawFive,
        StrategyKind::DrawSix,
        StrategyKind::DrawThreeTwice,
    ];

    pub fn strategy(&self) -> Box<dyn DraftStrategy> {
        match self {
            StrategyKind::DrawThree => Box::new(DrawN { count: 3 }),
            StrategyKind::DrawFour => Box::new(DrawN { count: 4 }),
            StrategyKind::DrawFive => Box::new(DrawN { count: 5 }),
            StrategyKind::DrawSix => Box::new(DrawN { count: 6 }),
            StrategyKind::DrawThreeTwice => Box::new(DrawThreeTwice),
        }
    }
}
