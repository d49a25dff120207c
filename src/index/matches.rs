use crate::index::synergy::SynergyIndex;
use crate::pack::{Pack, Playability};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Two packs share the display label '{0}'")]
    DuplicateLabel(String),
    #[error("Pair ({first}, {second}) is not in the match index")]
    PairNotIndexed { first: String, second: String },
}

/// Playability of every unordered pair in a pack collection.
///
/// Built once and read-only afterwards. Verdicts live in a dense symmetric
/// table keyed by each pack's position; the diagonal stays empty.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
    verdicts: Vec<Option<Playability>>,
    synergies: SynergyIndex,
    entries: usize,
}

impl MatchIndex {
    /// Derive the synergy index from `packs` and classify every pair
    pub fn build(packs: &[Pack]) -> Result<Self, IndexError> {
        Self::with_synergies(packs, SynergyIndex::build(packs))
    }

    /// Classify every pair of `packs` against an existing synergy index
    pub fn with_synergies(packs: &[Pack], synergies: SynergyIndex) -> Result<Self, IndexError> {
        let n = packs.len();
        let mut positions = HashMap::with_capacity(n);
        for (position, pack) in packs.iter().enumerate() {
            if positions.insert(pack.label().to_string(), position).is_some() {
                return Err(IndexError::DuplicateLabel(pack.label().to_string()));
            }
        }

        let mut verdicts = vec![None; n * n];
        let mut entries = 0;
        for (i, first) in packs.iter().enumerate() {
            for (j, second) in packs.iter().enumerate().skip(i + 1) {
                let verdict = first.pair_playability(second, &synergies);
                verdicts[i * n + j] = Some(verdict);
                verdicts[j * n + i] = Some(verdict);
                entries += 1;
            }
        }

        let labels = packs.iter().map(|pack| pack.label().to_string()).collect();
        let index = MatchIndex {
            labels,
            positions,
            verdicts,
            synergies,
            entries,
        };

        info!(packs = n, pairs = entries, "built match index");
        for verdict in Playability::ALL {
            debug!(%verdict, count = index.count(verdict), "match index verdicts");
        }
        Ok(index)
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Look up a pair by display labels; argument order does not matter
    pub fn lookup_labels(&self, first: &str, second: &str) -> Result<Playability, IndexError> {
        let n = self.labels.len();
        self.position(first)
            .zip(self.position(second))
            .and_then(|(i, j)| self.verdicts[i * n + j])
            .ok_or_else(|| IndexError::PairNotIndexed {
                first: first.to_string(),
                second: second.to_string(),
            })
    }

    /// Look up the verdict for two packs
    pub fn lookup(&self, first: &Pack, second: &Pack) -> Result<Playability, IndexError> {
        self.lookup_labels(first.label(), second.label())
    }

    /// Verdict by row and column position; `None` on the diagonal or out of range
    pub fn verdict_at(&self, row: usize, column: usize) -> Option<Playability> {
        let n = self.labels.len();
        if row >= n || column >= n {
            return None;
        }
        self.verdicts[row * n + column]
    }

    /// Every pair with the given verdict, each reported once in collection order
    pub fn pairs_with(&self, verdict: Playability) -> Vec<(&str, &str)> {
        let n = self.labels.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.verdicts[i * n + j] == Some(verdict) {
                    pairs.push((self.labels[i].as_str(), self.labels[j].as_str()));
                }
            }
        }
        pairs
    }

    pub fn count(&self, verdict: Playability) -> usize {
        self.pairs_with(verdict).len()
    }

    /// Pack labels in collection order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn synergies(&self) -> &SynergyIndex {
        &self.synergies
    }

    /// Number of indexed pairs
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::{Colour, CreatureType, PackDatabase};

    fn pack(name: &str, colours: &[Colour], types: &[CreatureType]) -> Pack {
        Pack::new(name, colours.iter().copied(), types.iter().copied()).unwrap()
    }

    #[test]
    fn test_index_covers_every_pair_once() {
        let db = PackDatabase::from_file("packs.json").expect("Failed to load packs");
        let index = MatchIndex::build(db.packs()).expect("labels are unique");
        let n = db.pack_count();

        assert_eq!(index.len(), n * (n - 1) / 2);
        let total: usize = Playability::ALL.iter().map(|v| index.count(*v)).sum();
        assert_eq!(total, index.len());
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let db = PackDatabase::from_file("packs.json").expect("Failed to load packs");
        let packs = db.packs();
        let index = MatchIndex::build(packs).expect("labels are unique");

        for (i, a) in packs.iter().enumerate() {
            for b in &packs[i + 1..] {
                let forward = index.lookup(a, b).expect("pair indexed");
                let backward = index.lookup(b, a).expect("pair indexed");
                assert_eq!(forward, backward);
                assert_eq!(forward, a.pair_playability(b, index.synergies()));
            }
        }
    }

    #[test]
    fn test_self_pair_is_not_indexed() {
        let packs = vec![
            pack("Birds", &[Colour::White], &[CreatureType::Bird]),
            pack("Rats", &[Colour::Black], &[CreatureType::Rat]),
        ];
        let index = MatchIndex::build(&packs).unwrap();
        assert!(matches!(
            index.lookup(&packs[0], &packs[0]),
            Err(IndexError::PairNotIndexed { .. })
        ));
        assert_eq!(index.verdict_at(1, 1), None);
    }

    #[test]
    fn test_unknown_pack_is_a_lookup_miss() {
        let packs = vec![
            pack("Birds", &[Colour::White], &[CreatureType::Bird]),
            pack("Rats", &[Colour::Black], &[CreatureType::Rat]),
        ];
        let stranger = pack("Otters", &[Colour::Blue], &[CreatureType::Otter]);
        let index = MatchIndex::build(&packs).unwrap();

        assert_eq!(
            index.lookup(&packs[0], &stranger),
            Err(IndexError::PairNotIndexed {
                first: "W Birds".to_string(),
                second: "U Otters".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let packs = vec![
            pack("Birds", &[Colour::White], &[CreatureType::Bird]),
            pack("Birds", &[Colour::White], &[CreatureType::Bat]),
        ];
        assert_eq!(
            MatchIndex::build(&packs).unwrap_err(),
            IndexError::DuplicateLabel("W Birds".to_string())
        );
    }

    #[test]
    fn test_pairs_with_groups_by_verdict() {
        let packs = vec![
            pack("Alpha", &[Colour::White], &[CreatureType::Bird]),
            pack("Beta", &[Colour::White], &[CreatureType::Bird]),
            pack("Frogs", &[Colour::Blue, Colour::Green], &[CreatureType::Frog]),
        ];
        let index = MatchIndex::build(&packs).unwrap();

        assert_eq!(index.pairs_with(Playability::Strong), vec![("W Alpha", "W Beta")]);
        assert_eq!(
            index.pairs_with(Playability::Unplayable),
            vec![("W Alpha", "UG Frogs"), ("W Beta", "UG Frogs")]
        );
        assert!(index.pairs_with(Playability::Weak).is_empty());
        assert_eq!(index.count(Playability::Medium), 0);
    }

    #[test]
    fn test_sample_data_verdicts() {
        let db = PackDatabase::from_file("packs.json").expect("Failed to load packs");
        let index = MatchIndex::build(db.packs()).unwrap();

        let cases = [
            ("WU Birds", "W Lifecreed", Playability::Strong),
            ("WG Rabbits", "WR Mice", Playability::Strong),
            ("U Lightshell", "U Skyskipper", Playability::Medium),
            ("RG Raccoons", "R Kindlespark", Playability::Weak),
            ("R Roughshod", "G Treeguard", Playability::Medium),
            ("UG Frogs", "W Lifecreed", Playability::Weak),
            ("B Daggerfang", "G Treeguard", Playability::Weak),
        ];
        for (first, second, expected) in cases {
            assert_eq!(
                index.lookup_labels(first, second),
                Ok(expected),
                "{} vs {}",
                first,
                second
            );
        }
    }
}
