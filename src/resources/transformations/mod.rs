mod frames;
mod traits;

pub use frames::RigidMotion;
pub use traits::{Frame, MotionTransform};
