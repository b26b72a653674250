// Defines the body struct (position, velocity, acceleration, mass, radius, charge) and its
// methods. Each body is one atom of a diatomic molecule; the charge is the partial charge
// used for the intermolecular Coulomb interaction.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Species {
    Hydrogen,
    Chlorine,
}

impl Species {
    /// Atomic mass in amu.
    pub fn mass(self) -> f32 {
        match self {
            Species::Hydrogen => config::HYDROGEN_MASS_AMU,
            Species::Chlorine => config::CHLORINE_MASS_AMU,
        }
    }

    /// Partial charge in units of e. Hydrogen carries the positive end of the dipole.
    pub fn partial_charge(self) -> f32 {
        match self {
            Species::Hydrogen => config::HCL_PARTIAL_CHARGE,
            Species::Chlorine => -config::HCL_PARTIAL_CHARGE,
        }
    }

    /// Van der Waals radius in angstroms, used for wall clearance and plotting.
    pub fn radius(self) -> f32 {
        match self {
            Species::Hydrogen => 1.20,
            Species::Chlorine => 1.75,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub charge: f32, // partial charge in units of e
    pub id: u64,
    pub species: Species,
    /// Index of the molecule this atom belongs to. Atoms in the same molecule
    /// are excluded from the Coulomb pair sum.
    pub molecule: usize,
    /// Net electric field accumulated at this body during the current step.
    pub e_field: Vec2,
}

use std::sync::atomic::{AtomicU64, Ordering};
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, species: Species, molecule: usize) -> Self {
        Self {
            pos,
            vel,
            acc: Vec2::zero(),
            mass: species.mass(),
            radius: species.radius(),
            charge: species.partial_charge(),
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            species,
            molecule,
            e_field: Vec2::zero(),
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.mag_sq()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hcl_partial_charges_are_opposite() {
        let h = Body::new(Vec2::zero(), Vec2::zero(), Species::Hydrogen, 0);
        let cl = Body::new(Vec2::new(1.27, 0.0), Vec2::zero(), Species::Chlorine, 0);
        assert!(h.charge > 0.0, "hydrogen end should be positive");
        assert_eq!(h.charge, -cl.charge, "molecule should be neutral overall");
        assert!(cl.mass > h.mass);
    }

    #[test]
    fn ids_are_unique() {
        let a = Body::new(Vec2::zero(), Vec2::zero(), Species::Hydrogen, 0);
        let b = Body::new(Vec2::zero(), Vec2::zero(), Species::Hydrogen, 0);
        assert_ne!(a.id, b.id);
    }
}
