//! # Cave Configuration
//!
//! TOML front-end for [`GenerationParams`] plus cave size.
//!
//! ```toml
//! width = 64
//! height = 48
//!
//! [params]
//! seed = 424242
//! noise = "simplex"     # "random" | "perlin" | "simplex"
//! octaves = 4
//! frequency = 6.0
//! steps = [
//!     [3, 4, 12, 16, 2, 5, 10, 14, 2],
//!     { b3_min = 5, b3_max = 8, b5_min = 0, b5_max = -1, s3_min = 4, s3_max = 8, s5_min = 0, s5_max = -1, reps = 3 },
//! ]
//! ```
//!
//! Omitted parameter fields fall back to [`GenerationParams::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CaveResult;
use crate::generator::CaveGenerator;
use crate::params::GenerationParams;

/// Size and parameters for one cave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaveConfig {
    /// Interior width in cells.
    pub width: usize,
    /// Interior height in cells.
    pub height: usize,
    /// Generation parameters.
    #[serde(default)]
    pub params: GenerationParams,
}

impl CaveConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::ConfigParse`](crate::CaveError::ConfigParse) on
    /// malformed TOML or wrong-shaped steps.
    pub fn from_toml_str(text: &str) -> CaveResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// I/O and parse failures.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CaveResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration and builds a generator for it.
    ///
    /// # Errors
    ///
    /// See [`CaveGenerator::new`].
    pub fn into_generator(self) -> CaveResult<CaveGenerator> {
        CaveGenerator::new(self.width, self.height, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaveError;
    use crate::noise::CaveSeed;
    use crate::params::NoiseKind;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = CaveConfig::from_toml_str("width = 10\nheight = 5\n").unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 5);
        assert_eq!(config.params, GenerationParams::default());
    }

    #[test]
    fn test_full_config() {
        let text = r#"
            width = 64
            height = 48

            [params]
            seed = 424242
            noise = "simplex"
            octaves = 4
            wall_chance = 0.65
            frequency = 6.0
            amplitude = 2.5
            steps = [
                [3, 4, 12, 16, 2, 5, 10, 14, 2],
                { b3_min = 5, b3_max = 8, b5_min = 0, b5_max = -1, s3_min = 4, s3_max = 8, s5_min = 0, s5_max = -1, reps = 3 },
            ]
        "#;
        let config = CaveConfig::from_toml_str(text).unwrap();
        let params = &config.params;

        assert_eq!(params.seed, CaveSeed::new(424_242));
        assert_eq!(params.noise, NoiseKind::Simplex);
        assert_eq!(params.octaves, 4);
        assert_eq!(params.amplitude, 2.5);
        assert_eq!(params.steps.len(), 2);
        assert_eq!(params.steps[0].b5_max, 16);
        assert_eq!(params.steps[1].s3_min, 4);
        assert_eq!(params.steps[1].reps, 3);
    }

    #[test]
    fn test_negative_seed_loads() {
        let text = "width = 24\nheight = 18\n[params]\nseed = -5\nwall_chance = 0.6\n";
        let config = CaveConfig::from_toml_str(text).unwrap();
        assert_eq!(config.params.seed, CaveSeed::from(-5i64));

        let generator = config.into_generator().unwrap();
        assert_eq!(generator.generate(), generator.generate());

        let config = CaveConfig::from_toml_str(&format!(
            "width = 4\nheight = 4\n[params]\nseed = {}\n",
            i64::MIN
        ))
        .unwrap();
        assert_eq!(config.params.seed, CaveSeed::new(1 << 63));
    }

    #[test]
    fn test_short_step_array_is_rejected() {
        let text = "width = 4\nheight = 4\n[params]\nsteps = [[1, 2, 3]]\n";
        assert!(matches!(
            CaveConfig::from_toml_str(text),
            Err(CaveError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_unknown_noise_kind_is_rejected() {
        let text = "width = 4\nheight = 4\n[params]\nnoise = \"worley\"\n";
        assert!(CaveConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn test_into_generator_validates() {
        let config = CaveConfig::from_toml_str("width = 0\nheight = 5\n").unwrap();
        assert!(matches!(
            config.into_generator(),
            Err(CaveError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("hollow_missing_config_7f3a.toml");
        assert!(matches!(CaveConfig::from_path(path), Err(CaveError::Io(_))));
    }
}
