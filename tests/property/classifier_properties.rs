use draft_synergy::index::{MatchIndex, SynergyIndex};
use draft_synergy::pack::{Colour, CreatureType, Pack, Playability};
use draft_synergy::rng::DraftRng;
use draft_synergy::simulation::{run_trials, Draft, DraftStrategy, DrawN, DrawThreeTwice};
use proptest::prelude::*;
use proptest::sample::subsequence;
use std::collections::HashSet;

fn colours() -> impl Strategy<Value = Vec<Colour>> {
    subsequence(Colour::ALL.to_vec(), 1..=3)
}

fn creature_types() -> impl Strategy<Value = Vec<CreatureType>> {
    subsequence(CreatureType::ALL.to_vec(), 1..=3)
}

fn pack(name: &'static str) -> impl Strategy<Value = Pack> {
    (colours(), creature_types()).prop_map(move |(c, t)| Pack::new(name, c, t).unwrap())
}

/// Collection of packs with distinct names, hence distinct labels
fn collection(min: usize, max: usize) -> impl Strategy<Value = Vec<Pack>> {
    prop::collection::vec((colours(), creature_types()), min..=max).prop_map(|shapes| {
        shapes
            .into_iter()
            .enumerate()
            .map(|(i, (c, t))| Pack::new(format!("Pack {}", i), c, t).unwrap())
            .collect()
    })
}

proptest! {
    #[test]
    fn classification_is_symmetric(a in pack("A"), b in pack("B"), extra in collection(0, 8)) {
        let mut all = extra;
        all.push(a.clone());
        all.push(b.clone());
        let synergies = SynergyIndex::build(&all);
        prop_assert_eq!(
            a.pair_playability(&b, &synergies),
            b.pair_playability(&a, &synergies)
        );
    }

    #[test]
    fn classification_is_total(a in pack("A"), b in pack("B"), extra in collection(0, 8)) {
        let synergies = SynergyIndex::build(&extra);
        let verdict = a.pair_playability(&b, &synergies);
        prop_assert!(Playability::ALL.contains(&verdict));
    }

    #[test]
    fn shared_colour_and_type_is_always_strong(a in pack("A"), b in pack("B")) {
        let synergies = SynergyIndex::default();
        if !a.matching_colours(&b).is_empty() && !a.matching_types(&b).is_empty() {
            prop_assert_eq!(a.pair_playability(&b, &synergies), Playability::Strong);
        }
    }

    #[test]
    fn synergy_only_improves_verdicts(a in pack("A"), b in pack("B"), extra in collection(0, 8)) {
        let without = a.pair_playability(&b, &SynergyIndex::default());
        let with = a.pair_playability(&b, &SynergyIndex::build(&extra));
        prop_assert!(with >= without);
    }

    #[test]
    fn match_index_has_every_pair_once(packs in collection(2, 14)) {
        let index = MatchIndex::build(&packs).unwrap();
        let n = packs.len();
        prop_assert_eq!(index.len(), n * (n - 1) / 2);

        let total: usize = Playability::ALL.iter().map(|v| index.count(*v)).sum();
        prop_assert_eq!(total, index.len());

        for (i, a) in packs.iter().enumerate() {
            for b in &packs[i + 1..] {
                prop_assert_eq!(index.lookup(a, b).unwrap(), index.lookup(b, a).unwrap());
            }
        }
    }

    #[test]
    fn counters_stay_monotone(packs in collection(6, 14), seed in any::<u64>(), count in 3usize..=6) {
        let index = MatchIndex::build(&packs).unwrap();
        let mut rng = DraftRng::new(Some(seed));

        for strategy in [&DrawN::new(count).unwrap() as &dyn DraftStrategy, &DrawThreeTwice] {
            let r = run_trials(strategy, &packs, &index, 200, &mut rng).unwrap();
            prop_assert_eq!(r.total_runs, 200);
            prop_assert!(r.strong_or_better <= r.medium_or_better);
            prop_assert!(r.medium_or_better <= r.weak_or_better);
            prop_assert!(r.weak_or_better <= r.unplayable_or_better);
            prop_assert!(r.unplayable_or_better <= r.total_runs);
        }
    }

    #[test]
    fn draw_three_twice_never_overlaps(packs in collection(6, 14), seed in any::<u64>()) {
        let mut rng = DraftRng::new(Some(seed));
        for _ in 0..50 {
            match DrawThreeTwice.draft(&packs, &mut rng).unwrap() {
                Draft::AnchorRest { anchor, rest } => {
                    let labels: HashSet<&str> = rest.iter().map(|p| p.label()).collect();
                    prop_assert_eq!(labels.len(), 3);
                    prop_assert!(!labels.contains(anchor.label()));
                }
                Draft::Flat(_) => prop_assert!(false, "expected an anchored draft"),
            }
        }
    }
}
