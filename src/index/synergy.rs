use crate::pack::{CreatureType, Pack};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Unordered pair of creature types, stored smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypePair(CreatureType, CreatureType);

impl TypePair {
    pub fn new(a: CreatureType, b: CreatureType) -> Self {
        if a <= b {
            TypePair(a, b)
        } else {
            TypePair(b, a)
        }
    }

    pub fn contains(&self, creature_type: CreatureType) -> bool {
        self.0 == creature_type || self.1 == creature_type
    }

    pub fn types(&self) -> (CreatureType, CreatureType) {
        (self.0, self.1)
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

/// Creature-type pairs that some single-colour pack is built around
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynergyIndex {
    pairs: BTreeSet<TypePair>,
}

impl SynergyIndex {
    /// Collect the type pair of every single-colour pack with exactly two creature types
    pub fn build(packs: &[Pack]) -> Self {
        let pairs: BTreeSet<TypePair> = packs
            .iter()
            .filter(|pack| pack.is_single_colour())
            .filter_map(|pack| {
                let mut types = pack.creature_types().iter();
                match (types.next(), types.next(), types.next()) {
                    (Some(&a), Some(&b), None) => Some(TypePair::new(a, b)),
                    _ => None,
                }
            })
            .collect();

        debug!(pairs = pairs.len(), "built synergy index");
        SynergyIndex { pairs }
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: impl IntoIterator<Item = TypePair>) -> Self {
        SynergyIndex {
            pairs: pairs.into_iter().collect(),
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = &TypePair> {
        self.pairs.iter()
    }

    pub fn contains(&self, pair: &TypePair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
