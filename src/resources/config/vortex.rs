use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::utils::{
    DEFAULT_CLOSED_BODY_TOLERANCE, DEFAULT_CORE_RADIUS, DEFAULT_WAKE_OFFSET_FRACTION,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: f64 },
}

/// Numerical policy for the vortex panel method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VortexConfig {
    /// Regularization radius of the vortex kernel. Inside it the induced
    /// velocity follows solid-body rotation.
    pub core_radius: f64,
    /// A body whose first and last boundary points are closer than this is
    /// treated as closed when locating the trailing edge.
    pub closed_body_tolerance: f64,
    /// Newly shed vortices sit `wake_offset_fraction * |U| * dt` behind the
    /// trailing edge (Katz & Plotkin, p. 390).
    pub wake_offset_fraction: f64,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            core_radius: DEFAULT_CORE_RADIUS,
            closed_body_tolerance: DEFAULT_CLOSED_BODY_TOLERANCE,
            wake_offset_fraction: DEFAULT_WAKE_OFFSET_FRACTION,
        }
    }
}

impl VortexConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: VortexConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// The core radius must be strictly positive; a zero radius leaves the
    /// kernel undefined at zero separation. The other values may be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.core_radius.is_finite() && self.core_radius > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "core_radius".to_string(),
                value: self.core_radius,
            });
        }
        let checks = [
            ("closed_body_tolerance", self.closed_body_tolerance),
            ("wake_offset_fraction", self.wake_offset_fraction),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
