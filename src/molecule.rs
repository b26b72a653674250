// molecule.rs
// Bond bookkeeping for diatomic molecules. A molecule is a pair of indices into the
// simulation's body vector plus the harmonic bond parameters.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::body::Body;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Molecule {
    /// Index of the hydrogen atom in the body vector.
    pub h: usize,
    /// Index of the chlorine atom in the body vector.
    pub cl: usize,
    /// Bond stiffness [amu/fs²].
    pub bond_k: f32,
    /// Equilibrium bond length [Å].
    pub bond_length: f32,
}

impl Molecule {
    pub fn new(h: usize, cl: usize, bond_k: f32, bond_length: f32) -> Self {
        Self { h, cl, bond_k, bond_length }
    }

    /// Vector from the chlorine atom to the hydrogen atom.
    pub fn bond_vector(&self, bodies: &[Body]) -> Vec2 {
        bodies[self.h].pos - bodies[self.cl].pos
    }

    /// Dipole moment vector in [e⋅Å], pointing from the negative to the positive end.
    pub fn dipole(&self, bodies: &[Body]) -> Vec2 {
        self.bond_vector(bodies) * bodies[self.h].charge
    }

    /// Harmonic bond potential energy, ½k(r - r₀)².
    pub fn spring_energy(&self, bodies: &[Body]) -> f32 {
        let stretch = self.bond_vector(bodies).mag() - self.bond_length;
        0.5 * self.bond_k * stretch * stretch
    }
}
