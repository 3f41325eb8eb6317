pub mod vortex;

pub use vortex::{ConfigError, VortexConfig};
