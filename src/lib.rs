//! Unsteady two-dimensional potential flow around moving bodies with a
//! discrete-vortex method: bound vortex panels on the body surface and free
//! vortex particles in the wake.
//!
//! A typical time step, driven by the caller:
//!
//! ```ignore
//! panels.update_strengths_unsteady(dt, freestream, Some(&wake), None, None)?;
//! wake.add_newly_shed(&panels)?;
//! wake.advect(dt, freestream, Some(&panels))?;
//! ```

pub mod components;
pub mod physics;
pub mod resources;
pub mod utils;

pub use components::{
    BoundVortexPanels, FreeVortexParticles, PointVortex, PolygonBody, SourceDoubletPanels,
};
pub use physics::{Body, Surface, VelocitySource, VortexKernel};
pub use resources::{ConfigError, Frame, MotionTransform, RigidMotion, VortexConfig};
pub use utils::{Result, VortexError};
