// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, iterate)

use crate::body::Body;
use crate::cell_list::CellList;
use crate::config;
use crate::molecule::Molecule;
use crate::profile_scope;
use rayon::prelude::*;
use ultraviolet::Vec2;

use super::forces;

/// The main molecular dynamics state: HCl molecules in a rectangular box.
pub struct Simulation {
    pub dt: f32,
    pub frame: usize,
    pub bodies: Vec<Body>,
    pub molecules: Vec<Molecule>,
    pub cell_list: CellList,
    /// Half-width of the domain (from center to edge), angstroms.
    pub domain_width: f32,
    /// Half-height of the domain (from center to edge), angstroms.
    pub domain_height: f32,
    pub background_e_field: Vec2,
    pub config: config::SimConfig,
    /// Simulation time when the thermostat last ran (fs).
    pub last_thermostat_time: f32,
}

impl Simulation {
    pub fn new(config: config::SimConfig) -> Self {
        let cell_size = config.coulomb_cutoff / 4.0;
        let cell_list = CellList::new(config.domain_width, config.domain_height, cell_size);
        let theta = config.background_field_theta_deg.to_radians();
        let background_e_field = Vec2::new(theta.cos(), theta.sin()) * config.background_field_mag;
        Self {
            dt: config.dt,
            frame: 0,
            bodies: Vec::new(),
            molecules: Vec::new(),
            cell_list,
            domain_width: config.domain_width,
            domain_height: config.domain_height,
            background_e_field,
            config,
            last_thermostat_time: 0.0,
        }
    }

    /// Current simulation time in femtoseconds.
    pub fn time(&self) -> f32 {
        self.frame as f32 * self.dt
    }

    pub fn step(&mut self) {
        profile_scope!("simulation_step");
        if self.bodies.is_empty() {
            self.frame += 1;
            return;
        }

        self.bodies.par_iter_mut().for_each(|body| {
            body.acc = Vec2::zero();
        });

        forces::apply_bond_forces(self);
        forces::attract(self);

        self.iterate();

        if self.config.use_thermostat {
            let time = self.time();
            if time - self.last_thermostat_time >= self.config.thermostat_interval_fs {
                self.apply_thermostat();
                self.last_thermostat_time = time;
            }
        }

        self.frame += 1;
    }

    /// Euler-Cromer integration with reflecting walls.
    pub fn iterate(&mut self) {
        profile_scope!("simulation_iterate");
        let damping = self.config.damping_base;
        let (bw, bh) = (self.domain_width, self.domain_height);
        for body in &mut self.bodies {
            body.vel += body.acc * self.dt;
            if damping != 1.0 {
                body.vel *= damping;
            }
            body.pos += body.vel * self.dt;
            // Reflect from walls
            if body.pos.x < -bw {
                body.pos.x = -bw;
                body.vel.x = -body.vel.x;
            } else if body.pos.x > bw {
                body.pos.x = bw;
                body.vel.x = -body.vel.x;
            }
            if body.pos.y < -bh {
                body.pos.y = -bh;
                body.vel.y = -body.vel.y;
            } else if body.pos.y > bh {
                body.pos.y = bh;
                body.vel.y = -body.vel.y;
            }
        }
    }

    /// Replace the particle content with a prepared scenario.
    pub fn set_scene(&mut self, bodies: Vec<Body>, molecules: Vec<Molecule>) {
        self.bodies = bodies;
        self.molecules = molecules;
        self.frame = 0;
        self.last_thermostat_time = 0.0;
        self.cell_list
            .update_domain_size(self.domain_width, self.domain_height);
    }
}
