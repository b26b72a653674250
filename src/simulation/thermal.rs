// thermal.rs
// Temperature measurement and velocity-rescaling thermostat

use crate::body::Body;
use crate::units::BOLTZMANN_CONSTANT;
use rand::prelude::*;
use rand_distr::Normal;

use super::Simulation;

/// Instantaneous temperature from the kinetic energy.
/// In 2D each particle carries k_B·T of kinetic energy on average.
pub fn measure_temperature(bodies: &[Body]) -> f32 {
    if bodies.is_empty() {
        return 0.0;
    }
    let ke: f32 = bodies.iter().map(|b| b.kinetic_energy()).sum();
    ke / bodies.len() as f32 / BOLTZMANN_CONSTANT
}

/// Draw velocities from the Maxwell-Boltzmann distribution at `target_temp`,
/// then remove the net drift so the box has zero total momentum.
pub fn initialize_velocities_to_temperature(bodies: &mut [Body], target_temp: f32, seed: u64) {
    if bodies.is_empty() || target_temp <= 0.0 {
        return;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for body in bodies.iter_mut() {
        // per-axis sigma = sqrt(kT/m)
        let sigma = (BOLTZMANN_CONSTANT * target_temp / body.mass).sqrt();
        let normal = Normal::new(0.0, sigma as f64).unwrap();
        body.vel.x = normal.sample(&mut rng) as f32;
        body.vel.y = normal.sample(&mut rng) as f32;
    }
    let total_mass: f32 = bodies.iter().map(|b| b.mass).sum();
    let mut momentum = ultraviolet::Vec2::zero();
    for body in bodies.iter() {
        momentum += body.vel * body.mass;
    }
    let drift = momentum / total_mass;
    for body in bodies.iter_mut() {
        body.vel -= drift;
    }
}

impl Simulation {
    /// Rescale all velocities toward the target temperature.
    pub fn apply_thermostat(&mut self) {
        let target_temp = self.config.temperature;
        if self.bodies.is_empty() {
            return;
        }
        if target_temp <= 0.0 {
            eprintln!("[thermostat-skip] non-positive target");
            return;
        }
        let current_temp = measure_temperature(&self.bodies);
        if current_temp <= 1e-8 {
            // Bootstrap: assign random velocities at the target temperature
            initialize_velocities_to_temperature(&mut self.bodies, target_temp, self.frame as u64);
            return;
        }
        let scale = (target_temp / current_temp).sqrt();
        for body in &mut self.bodies {
            body.vel *= scale;
        }
        #[cfg(feature = "thermostat_debug")]
        eprintln!(
            "[thermostat] frame={} T={:.2}K target={:.2}K scale={:.4}",
            self.frame, current_temp, target_temp, scale
        );
    }
}
