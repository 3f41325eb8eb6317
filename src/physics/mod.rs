pub mod kernel;
pub mod traits;

pub use kernel::VortexKernel;
pub use traits::{Body, Surface, VelocitySource};
