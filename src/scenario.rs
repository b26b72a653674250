// scenario.rs
// Builds the initial molecular scene from the loaded configuration: molecules
// on a jittered lattice with random orientations, velocities drawn from the
// Maxwell-Boltzmann distribution at the initial temperature.

use ultraviolet::Vec2;

use crate::body::{Body, Species};
use crate::config::SimConfig;
use crate::init_config::MdInitConfig;
use crate::molecule::Molecule;
use crate::simulation::{thermal, Simulation};

/// Minimum clearance between a lattice site and the walls, angstroms.
const WALL_MARGIN: f32 = 3.0;

/// Place `count` molecules on a near-square lattice inside the domain.
/// Each molecule gets a random orientation and a small positional jitter;
/// the bond starts at its rest length.
pub fn build_lattice(count: usize, config: &SimConfig, seed: u64) -> (Vec<Body>, Vec<Molecule>) {
    let mut bodies = Vec::with_capacity(count * 2);
    let mut molecules = Vec::with_capacity(count);
    if count == 0 {
        return (bodies, molecules);
    }

    fastrand::seed(seed);
    let cols = (count as f32).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    let usable_w = 2.0 * (config.domain_width - WALL_MARGIN);
    let usable_h = 2.0 * (config.domain_height - WALL_MARGIN);
    let dx = usable_w / cols as f32;
    let dy = usable_h / rows as f32;
    let jitter = 0.15 * dx.min(dy);

    for i in 0..count {
        let col = i % cols;
        let row = i / cols;
        let center = Vec2::new(
            -config.domain_width + WALL_MARGIN + (col as f32 + 0.5) * dx
                + (fastrand::f32() - 0.5) * jitter,
            -config.domain_height + WALL_MARGIN + (row as f32 + 0.5) * dy
                + (fastrand::f32() - 0.5) * jitter,
        );
        let angle = fastrand::f32() * std::f32::consts::TAU;
        let dir = Vec2::new(angle.cos(), angle.sin());
        // center of mass at the lattice site
        let m_h = Species::Hydrogen.mass();
        let m_cl = Species::Chlorine.mass();
        let total = m_h + m_cl;
        let h_pos = center + dir * (config.bond_length * m_cl / total);
        let cl_pos = center - dir * (config.bond_length * m_h / total);

        let mol_id = molecules.len();
        let h_idx = bodies.len();
        bodies.push(Body::new(h_pos, Vec2::zero(), Species::Hydrogen, mol_id));
        bodies.push(Body::new(cl_pos, Vec2::zero(), Species::Chlorine, mol_id));
        molecules.push(Molecule::new(
            h_idx,
            h_idx + 1,
            config.bond_k,
            config.bond_length,
        ));
    }

    (bodies, molecules)
}

/// Build a simulation ready to run from the `[md]` section of the init file.
pub fn setup_md(md: &MdInitConfig) -> Simulation {
    let config = md.to_sim_config();
    let count = md.molecule_count();
    let seed = md.seed();
    let (mut bodies, molecules) = build_lattice(count, &config, seed);
    thermal::initialize_velocities_to_temperature(&mut bodies, config.temperature, seed);
    println!(
        "[scenario] {} molecules ({} atoms), domain {}x{} Å, T={} K, seed={}",
        count,
        bodies.len(),
        2.0 * config.domain_width,
        2.0 * config.domain_height,
        config.temperature,
        seed
    );
    let mut sim = Simulation::new(config);
    sim.set_scene(bodies, molecules);
    sim
}
