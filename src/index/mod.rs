pub mod matches;
pub mod synergy;

pub use matches::{IndexError, MatchIndex};
pub use synergy::{SynergyIndex, TypePair};
