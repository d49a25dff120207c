pub mod cli;
pub mod index;
pub mod logging;
pub mod pack;
pub mod report;
pub mod rng;
pub mod simulation;
