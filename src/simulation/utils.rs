// Energy and dipole bookkeeping over the current simulation state.

use ultraviolet::Vec2;

use super::Simulation;
use crate::config;

impl Simulation {
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    pub fn spring_energy(&self) -> f32 {
        self.molecules
            .iter()
            .map(|m| m.spring_energy(&self.bodies))
            .sum()
    }

    /// Intermolecular Coulomb potential energy, U = k q₁q₂ / r over unique
    /// cross-molecule pairs. O(N²); used for diagnostics, not forces.
    pub fn coulomb_energy(&self) -> f32 {
        let k_e = self.config.coulomb_constant;
        let mut energy = 0.0;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (a, b) = (&self.bodies[i], &self.bodies[j]);
                if a.molecule == b.molecule {
                    continue;
                }
                let r = (a.pos - b.pos).mag().max(config::MIN_COULOMB_DISTANCE);
                energy += k_e * a.charge * b.charge / r;
            }
        }
        energy
    }

    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy() + self.spring_energy() + self.coulomb_energy()
    }

    /// Vector sum of all molecular dipole moments [e⋅Å].
    pub fn net_dipole(&self) -> Vec2 {
        self.molecules
            .iter()
            .fold(Vec2::zero(), |acc, m| acc + m.dipole(&self.bodies))
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies
            .iter()
            .fold(Vec2::zero(), |acc, b| acc + b.vel * b.mass)
    }
}
