// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod forces;
pub mod simulation;
pub mod thermal;
pub mod utils;
pub use simulation::*;
