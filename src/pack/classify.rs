//! Pairwise playability classification.
//!
//! Two packs are judged on shared colours first, then on whether their
//! creature types line up, either directly or through a synergistic type
//! pair found elsewhere in the collection.

use crate::index::{SynergyIndex, TypePair};
use crate::pack::types::{Colour, CreatureType, Pack, Playability};
use std::collections::BTreeSet;

impl Pack {
    /// Creature types present in both packs
    pub fn matching_types(&self, other: &Pack) -> BTreeSet<CreatureType> {
        self.creature_types()
            .intersection(other.creature_types())
            .copied()
            .collect()
    }

    /// Colours present in both packs
    pub fn matching_colours(&self, other: &Pack) -> BTreeSet<Colour> {
        self.colours().intersection(other.colours()).copied().collect()
    }

    /// Synergistic pairs that touch a type from each pack.
    ///
    /// A pair qualifies when it shares at least one type with `other` and at
    /// least one type with `self`. The same type may satisfy both sides, so a
    /// plain shared type whose pair is indexed also counts here.
    pub fn synergistic_types(&self, other: &Pack, synergies: &SynergyIndex) -> BTreeSet<TypePair> {
        synergies
            .pairs()
            .filter(|pair| other.creature_types().iter().any(|t| pair.contains(*t)))
            .filter(|pair| self.creature_types().iter().any(|t| pair.contains(*t)))
            .copied()
            .collect()
    }

    fn has_type_link(&self, other: &Pack, synergies: &SynergyIndex) -> bool {
        !self.matching_types(other).is_empty()
            || !self.synergistic_types(other, synergies).is_empty()
    }

    /// Classify how well this pack plays alongside `other`
    pub fn pair_playability(&self, other: &Pack, synergies: &SynergyIndex) -> Playability {
        let shares_colour = !self.matching_colours(other).is_empty();
        let type_link = self.has_type_link(other, synergies);
        // Both packs mono-coloured
        let both_mono = self.colours().len().max(other.colours().len()) == 1;

        match (shares_colour, type_link, both_mono) {
            // e.g. WU Birds with W Lifecreed, WG Rabbits with WR Mice
            (true, true, _) => Playability::Strong,
            // e.g. U Lightshell with U Skyskipper
            (true, false, true) => Playability::Medium,
            // e.g. RG Raccoons with R Kindlespark
            (true, false, false) => Playability::Weak,
            // e.g. R Roughshod with G Treeguard, linked through W Brave-Kin
            (false, true, true) => Playability::Medium,
            // e.g. UG Frogs with W Lifecreed, linked through U Skyskipper
            (false, true, false) => Playability::Weak,
            // e.g. B Daggerfang with R Kindlespark
            (false, false, true) => Playability::Weak,
            // three or more colours and nothing holding them together
            (false, false, false) => Playability::Unplayable,
        }
    }
}
