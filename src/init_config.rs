// init_config.rs
// Handles loading and parsing the run configuration from init_config.toml

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::{LightningConfig, SimConfig};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub md: Option<MdInitConfig>,
    pub lightning: Option<LightningConfig>,
}

/// The `[md]` section: molecule placement plus overrides for SimConfig.
/// Every field is optional so a partial file falls back to the defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MdInitConfig {
    pub molecules: Option<usize>,
    pub seed: Option<u64>,
    pub dt: Option<f32>,
    pub frames: Option<usize>,
    /// Half-width of the domain (center to edge), angstroms.
    pub domain_width: Option<f32>,
    /// Half-height of the domain (center to edge), angstroms.
    pub domain_height: Option<f32>,
    pub temperature: Option<f32>,
    pub use_thermostat: Option<bool>,
    pub background_field_mag: Option<f32>,
    pub background_field_theta_deg: Option<f32>,
}

impl MdInitConfig {
    pub fn molecule_count(&self) -> usize {
        self.molecules
            .unwrap_or(crate::config::DEFAULT_MOLECULE_COUNT)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(1)
    }

    /// Fold the overrides into a SimConfig.
    pub fn to_sim_config(&self) -> SimConfig {
        let mut config = SimConfig::default();
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(w) = self.domain_width {
            config.domain_width = w;
        }
        if let Some(h) = self.domain_height {
            config.domain_height = h;
        }
        if let Some(t) = self.temperature {
            config.temperature = t;
        }
        if let Some(u) = self.use_thermostat {
            config.use_thermostat = u;
        }
        if let Some(m) = self.background_field_mag {
            config.background_field_mag = m;
        }
        if let Some(t) = self.background_field_theta_deg {
            config.background_field_theta_deg = t;
        }
        config
    }
}

impl InitConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `init_config.toml` from the working directory.
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load(Path::new("init_config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let parsed: InitConfig = toml::from_str(
            r#"
            [md]
            molecules = 4
            temperature = 150.0
            "#,
        )
        .unwrap();
        let md = parsed.md.unwrap();
        assert_eq!(md.molecule_count(), 4);
        let config = md.to_sim_config();
        assert_eq!(config.temperature, 150.0);
        assert_eq!(config.dt, crate::config::DEFAULT_DT_FS);
        assert!(parsed.lightning.is_none());
    }

    #[test]
    fn lightning_section_parses_into_config() {
        let parsed: InitConfig = toml::from_str(
            r#"
            [lightning]
            nx = 51
            ny = 71
            eta = 2.0
            tolerance = 1e-4
            max_sweeps = 5000
            max_steps = 2000
            seed = 9
            progress_interval = 25
            "#,
        )
        .unwrap();
        let l = parsed.lightning.unwrap();
        assert_eq!(l.nx, 51);
        assert_eq!(l.ny, 71);
        assert_eq!(l.eta, 2.0);
        assert_eq!(l.seed, 9);
    }

    #[test]
    fn empty_file_is_valid() {
        let parsed: InitConfig = toml::from_str("").unwrap();
        assert!(parsed.md.is_none());
        assert!(parsed.lightning.is_none());
    }
}
