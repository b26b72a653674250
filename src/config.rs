// Centralized configuration for simulation parameters

use crate::units;
use serde::{Deserialize, Serialize};

// ====================
// HCl Molecule Parameters
// ====================
/// Hydrogen atomic mass in amu.
pub const HYDROGEN_MASS_AMU: f32 = 1.00794;
/// Chlorine atomic mass in amu.
pub const CHLORINE_MASS_AMU: f32 = 35.453;
/// HCl equilibrium bond length in angstroms.
pub const HCL_BOND_LENGTH_A: f32 = 1.27;
/// HCl bond force constant, 516 N/m converted to [amu/fs²].
pub const HCL_BOND_K: f32 = (516.0 * units::SPRING_SI_TO_SIM) as f32;
/// HCl gas-phase dipole moment in debye.
pub const HCL_DIPOLE_DEBYE: f64 = 1.08;
/// Partial charge on each atom (units of e), q = p / d₀.
pub const HCL_PARTIAL_CHARGE: f32 =
    (HCL_DIPOLE_DEBYE * units::DEBYE / HCL_BOND_LENGTH_A as f64) as f32;

// ====================
// Integration Parameters
// ====================
/// Default timestep in femtoseconds. The HCl vibration period is ~11 fs,
/// so 0.05 fs resolves the fastest mode comfortably.
pub const DEFAULT_DT_FS: f32 = 0.05;
/// Default number of frames for a fixed-length run (1 ps at the default dt).
pub const DEFAULT_FRAMES: usize = 20_000;
/// Half-extent of the square simulation domain in angstroms.
pub const DOMAIN_BOUNDS: f32 = 25.0;
/// Default number of molecules.
pub const DEFAULT_MOLECULE_COUNT: usize = 16;
/// Default initial temperature in kelvin.
pub const DEFAULT_TEMPERATURE_K: f32 = 300.0;

// ====================
// Coulomb Parameters
// ====================
/// Cutoff for the intermolecular Coulomb sum, in angstroms.
pub const COULOMB_CUTOFF_A: f32 = 20.0;
/// Pair distances below this are clamped to keep the 1/r² force finite.
pub const MIN_COULOMB_DISTANCE: f32 = 0.05;

// ====================
// Thread Pool
// ====================
pub const MIN_THREADS: usize = 3;
pub const THREADS_LEAVE_FREE: usize = 2;

/// Runtime-adjustable simulation parameters. Loaded from `init_config.toml`
/// when present; every field has a serde default so old files keep working.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f32,
    pub frames: usize,
    /// Half-width of the domain (center to edge), angstroms.
    pub domain_width: f32,
    /// Half-height of the domain (center to edge), angstroms.
    pub domain_height: f32,
    pub bond_k: f32,
    pub bond_length: f32,
    pub coulomb_constant: f32,
    pub coulomb_cutoff: f32,
    /// Target temperature for the thermostat, kelvin.
    pub temperature: f32,
    pub use_thermostat: bool,
    /// Interval between thermostat applications (fs).
    #[serde(alias = "thermostat_frequency")]
    pub thermostat_interval_fs: f32,
    /// Uniform background E-field magnitude (simulation units). Zero disables it.
    pub background_field_mag: f32,
    /// Background field direction in degrees from +x.
    pub background_field_theta_deg: f32,
    /// Velocity damping factor applied each step (1.0 = none).
    pub damping_base: f32,
    /// Print a progress line every this many frames.
    pub progress_interval: usize,
    /// Record a diagnostics sample every this many frames.
    pub sample_interval: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT_FS,
            frames: DEFAULT_FRAMES,
            domain_width: DOMAIN_BOUNDS,
            domain_height: DOMAIN_BOUNDS,
            bond_k: HCL_BOND_K,
            bond_length: HCL_BOND_LENGTH_A,
            coulomb_constant: units::COULOMB_CONSTANT,
            coulomb_cutoff: COULOMB_CUTOFF_A,
            temperature: DEFAULT_TEMPERATURE_K,
            use_thermostat: true,
            thermostat_interval_fs: 10.0,
            background_field_mag: 0.0,
            background_field_theta_deg: 0.0,
            damping_base: 1.0,
            progress_interval: 1000,
            sample_interval: 20,
        }
    }
}

/// Parameters for the lightning growth experiment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LightningConfig {
    /// Grid width in cells.
    pub nx: usize,
    /// Grid height in cells (row 0 is the cloud, row ny-1 the ground).
    pub ny: usize,
    /// Growth exponent η in the p ∝ φ^η selection rule.
    pub eta: f32,
    /// Relaxation stops when the largest per-cell update falls below this.
    pub tolerance: f32,
    /// Hard cap on Jacobi sweeps per relaxation call.
    pub max_sweeps: usize,
    /// Hard cap on growth steps.
    pub max_steps: usize,
    pub seed: u64,
    pub progress_interval: usize,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            nx: 101,
            ny: 101,
            eta: 1.0,
            tolerance: 1e-4,
            max_sweeps: 10_000,
            max_steps: 5_000,
            seed: 0,
            progress_interval: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_charge_matches_dipole() {
        // 1.08 D over 1.27 Å is about 0.177 e
        assert!((HCL_PARTIAL_CHARGE - 0.177).abs() < 0.001);
    }

    #[test]
    fn bond_stiffness_conversion() {
        // 516 N/m is about 0.31 amu/fs²
        assert!((HCL_BOND_K - 0.3107).abs() < 0.002);
    }
}
