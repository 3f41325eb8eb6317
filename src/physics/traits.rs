use nalgebra::Vector2;

use crate::components::{FreeVortexParticles, PointVortex};
use crate::resources::{Frame, MotionTransform};
use crate::utils::Result;

/// Boundary geometry and kinematics of a body immersed in the flow
pub trait Body {
    /// Ordered boundary polygon vertices in the requested frame
    fn points(&self, frame: Frame) -> Vec<Vector2<f64>>;

    /// Rigid-body motion, or `None` for a body at rest in the inertial frame
    fn motion(&self) -> Option<&dyn MotionTransform>;
}

/// Anything that induces a velocity field: bound panels, wakes, surfaces.
pub trait VelocitySource {
    /// Add the velocity induced at each of `targets` into `out`.
    ///
    /// `out` must have one entry per target.
    fn add_induced_velocity(&self, targets: &[Vector2<f64>], out: &mut [Vector2<f64>])
        -> Result<()>;

    fn induced_velocity(&self, targets: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>> {
        let mut vel = vec![Vector2::zeros(); targets.len()];
        self.add_induced_velocity(targets, &mut vel)?;
        Ok(vel)
    }
}

/// Interchangeable surface representation of a body
pub trait Surface: VelocitySource {
    /// Resynchronise with the body after its reference geometry may have changed
    fn update_positions(&mut self);

    /// Solve for surface strengths for one unsteady time step
    fn update_strengths(
        &mut self,
        wake: Option<&FreeVortexParticles>,
        freestream: Vector2<f64>,
        dt: f64,
    ) -> Result<()>;

    /// Most recent wake element produced by the surface, if it has one
    fn wake_panel(&self) -> Option<PointVortex>;
}
