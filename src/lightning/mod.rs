// lightning/mod.rs
// Dielectric breakdown lightning model: Laplace relaxation of the potential
// between a cloud row and the ground, alternated with stochastic channel
// growth until the discharge connects.

pub mod grid;
pub mod growth;
pub mod solver;

use serde::{Deserialize, Serialize};

use crate::config::LightningConfig;
pub use grid::{CellState, PotentialGrid};

/// Outcome of a full lightning run.
#[derive(Clone, Serialize, Deserialize)]
pub struct LightningResult {
    pub grid: PotentialGrid,
    pub steps: usize,
    pub total_sweeps: usize,
    pub reached_ground: bool,
    pub config: LightningConfig,
}

/// Run the relax/grow loop until the channel reaches the ground or the step
/// cap is hit. Progress is printed every `progress_interval` steps.
pub fn run(config: &LightningConfig) -> LightningResult {
    let mut grid = PotentialGrid::new(config.nx, config.ny);
    let mut rng = fastrand::Rng::with_seed(config.seed);
    grid.seed_channel();

    let mut total_sweeps = 0;
    let mut steps = 0;
    while steps < config.max_steps {
        total_sweeps += solver::relax(&mut grid, config.tolerance, config.max_sweeps);
        match growth::grow_step(&mut grid, config.eta, steps + 1, &mut rng) {
            Some(_) => steps += 1,
            None => break,
        }
        if config.progress_interval > 0 && steps % config.progress_interval == 0 {
            println!(
                "[lightning] step={} channel={} sweeps={}",
                steps,
                grid.channel_len(),
                total_sweeps
            );
        }
        if grid.reached_ground() {
            break;
        }
    }

    let reached_ground = grid.reached_ground();
    println!(
        "[lightning] finished: steps={} channel={} reached_ground={}",
        steps,
        grid.channel_len(),
        reached_ground
    );
    LightningResult {
        grid,
        steps,
        total_sweeps,
        reached_ground,
        config: config.clone(),
    }
}
