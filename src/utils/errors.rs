use thiserror::Error;

use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum VortexError {
    #[error("Linear system of size {size} is singular or ill-conditioned")]
    SingularSystem { size: usize },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("No vortex has been shed yet; run an unsteady strength update first")]
    NoShedVortex,

    #[error("Degenerate panel geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, VortexError>;

/// Fails with `DimensionMismatch` unless `got == expected`.
#[inline]
pub fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(VortexError::DimensionMismatch { expected, got })
    }
}
