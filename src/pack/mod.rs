pub mod classify;
pub mod database;
pub mod types;

pub use database::{PackDatabase, PackDatabaseError};
pub use types::{Colour, CreatureType, Pack, PackError, PackRecord, Playability};
