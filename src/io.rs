// io.rs
// Snapshot save/load for the molecular dynamics state. Snapshots are either
// gzipped JSON (inspectable) or bincode (compact); serde defaults keep old
// snapshot files loadable when fields are added.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::body::Body;
use crate::config::SimConfig;
use crate::molecule::Molecule;
use crate::simulation::Simulation;

#[derive(Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub bodies: Vec<Body>,
    pub molecules: Vec<Molecule>,
    pub config: SimConfig,
    #[serde(default = "default_domain")]
    pub domain_width: f32,
    #[serde(default = "default_domain")]
    pub domain_height: f32,
    #[serde(default)]
    pub frame: usize,
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default)]
    pub last_thermostat_time: f32,
}

fn default_domain() -> f32 {
    crate::config::DOMAIN_BOUNDS
}

fn default_dt() -> f32 {
    crate::config::DEFAULT_DT_FS
}

impl SimulationState {
    pub fn capture(sim: &Simulation) -> Self {
        Self {
            bodies: sim.bodies.clone(),
            molecules: sim.molecules.clone(),
            config: sim.config.clone(),
            domain_width: sim.domain_width,
            domain_height: sim.domain_height,
            frame: sim.frame,
            dt: sim.dt,
            last_thermostat_time: sim.last_thermostat_time,
        }
    }

    /// Rebuild a Simulation from this snapshot.
    pub fn restore(self) -> Simulation {
        let mut sim = Simulation::new(self.config);
        sim.domain_width = self.domain_width;
        sim.domain_height = self.domain_height;
        sim.dt = self.dt;
        sim.set_scene(self.bodies, self.molecules);
        sim.frame = self.frame;
        sim.last_thermostat_time = self.last_thermostat_time;
        sim
    }
}

/// Save as gzipped JSON.
pub fn save_state(state: &SimulationState, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, state)?;
    encoder.finish()?.flush()?;
    Ok(())
}

/// Load a gzipped JSON snapshot.
pub fn load_state(path: &Path) -> Result<SimulationState, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut json = String::new();
    decoder.read_to_string(&mut json)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save as compact bincode (no compression; bincode is already dense).
pub fn save_state_binary(state: &SimulationState, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    bincode::serialize_into(BufWriter::new(file), state)?;
    Ok(())
}

pub fn load_state_binary(path: &Path) -> Result<SimulationState, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Species;
    use ultraviolet::Vec2;

    fn sample_sim() -> Simulation {
        let mut sim = Simulation::new(SimConfig::default());
        let bodies = vec![
            Body::new(Vec2::new(1.27, 0.0), Vec2::new(0.01, -0.02), Species::Hydrogen, 0),
            Body::new(Vec2::zero(), Vec2::zero(), Species::Chlorine, 0),
        ];
        let molecules = vec![Molecule::new(0, 1, sim.config.bond_k, sim.config.bond_length)];
        sim.set_scene(bodies, molecules);
        sim.frame = 123;
        sim
    }

    #[test]
    fn json_gz_roundtrip_preserves_state() {
        let sim = sample_sim();
        let state = SimulationState::capture(&sim);
        let dir = std::env::temp_dir().join("polar_sim_io_test");
        let path = dir.join("snapshot.json.gz");
        save_state(&state, &path).unwrap();
        let loaded = load_state(&path).unwrap();
        assert_eq!(loaded.frame, 123);
        assert_eq!(loaded.bodies.len(), 2);
        assert_eq!(loaded.molecules.len(), 1);
        assert!((loaded.bodies[0].pos.x - 1.27).abs() < 1e-6);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn binary_roundtrip_preserves_state() {
        let sim = sample_sim();
        let state = SimulationState::capture(&sim);
        let dir = std::env::temp_dir().join("polar_sim_io_bin_test");
        let path = dir.join("snapshot.bin");
        save_state_binary(&state, &path).unwrap();
        let loaded = load_state_binary(&path).unwrap();
        assert_eq!(loaded.bodies[1].species, Species::Chlorine);
        assert_eq!(loaded.molecules[0].h, 0);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn restore_rebuilds_a_steppable_simulation() {
        let sim = sample_sim();
        let state = SimulationState::capture(&sim);
        let mut restored = state.restore();
        assert_eq!(restored.frame, 123);
        restored.step();
        assert_eq!(restored.frame, 124);
    }
}
