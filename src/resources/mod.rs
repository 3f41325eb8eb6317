pub mod config;
pub mod transformations;

pub use config::{ConfigError, VortexConfig};
pub use transformations::{Frame, MotionTransform, RigidMotion};
