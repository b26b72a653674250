//! Force calculation functions for the molecular dynamics loop.
//!
//! Provides the intermolecular Coulomb pass (cutoff pair sum over atoms of
//! different molecules) and the intramolecular harmonic bond forces.

use crate::config;
use crate::profile_scope;
use crate::simulation::Simulation;
use rayon::prelude::*;

/// Compute the electric field at every atom and convert it to acceleration.
///
/// - Rebuilds the cell list for the current positions.
/// - Sums the Coulomb field from all atoms of *other* molecules within the
///   cutoff (the bond stands in for the intramolecular interaction).
/// - Adds the uniform background field and applies a = qE/m.
pub fn attract(sim: &mut Simulation) {
    profile_scope!("forces_coulomb");
    let k_e = sim.config.coulomb_constant;
    let cutoff = sim.config.coulomb_cutoff;
    let background = sim.background_e_field;

    sim.cell_list.rebuild(&sim.bodies);
    let cell_list = &sim.cell_list;
    let bodies_addr = std::ptr::addr_of!(sim.bodies) as usize;

    sim.bodies.par_iter_mut().enumerate().for_each(|(i, body)| {
        let bodies = unsafe { &*(bodies_addr as *const Vec<crate::body::Body>) };
        let mut field = ultraviolet::Vec2::zero();
        for &j in &cell_list.find_neighbors_within(bodies, i, cutoff) {
            let other = &bodies[j];
            if other.molecule == body.molecule {
                continue;
            }
            let dr = body.pos - other.pos;
            let r = dr.mag().max(config::MIN_COULOMB_DISTANCE);
            // E = k q r_hat / r²
            field += dr * (k_e * other.charge / (r * r * r));
        }
        body.e_field = field + background;
        body.acc += body.charge * body.e_field / body.mass;
    });
}

/// Apply the harmonic bond force to each molecule's atom pair.
///
/// F = -k (|r| - r₀) r_hat, equal and opposite on the two atoms.
pub fn apply_bond_forces(sim: &mut Simulation) {
    profile_scope!("forces_bond");
    for mol in &sim.molecules {
        let dr = sim.bodies[mol.h].pos - sim.bodies[mol.cl].pos;
        let r = dr.mag();
        if r < 1e-6 {
            // overlapping atoms give no defined direction; skip this frame
            continue;
        }
        let stretch = r - mol.bond_length;
        let force = dr / r * (-mol.bond_k * stretch);
        let (mh, mcl) = (sim.bodies[mol.h].mass, sim.bodies[mol.cl].mass);
        sim.bodies[mol.h].acc += force / mh;
        sim.bodies[mol.cl].acc -= force / mcl;
    }
}
