use nalgebra::Vector2;
use tracing::trace;

use crate::components::{FreeVortexParticles, PointVortex};
use crate::physics::{Body, Surface, VelocitySource};
use crate::resources::Frame;
use crate::utils::{check_len, Result};

/// Source/doublet panel surface.
///
/// Tracks the body's inertial-frame panel vertices only; no strengths are
/// solved, so it induces no velocity and sheds no wake.
pub struct SourceDoubletPanels<B: Body> {
    body: B,
    panels: Vec<Vector2<f64>>,
}

impl<B: Body> SourceDoubletPanels<B> {
    pub fn new(body: B) -> Self {
        let panels = body.points(Frame::Inertial);
        Self { body, panels }
    }

    /// Panel vertices as of the last `update_positions`
    pub fn panels(&self) -> &[Vector2<f64>] {
        &self.panels
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }
}

impl<B: Body> VelocitySource for SourceDoubletPanels<B> {
    fn add_induced_velocity(
        &self,
        targets: &[Vector2<f64>],
        out: &mut [Vector2<f64>],
    ) -> Result<()> {
        check_len(targets.len(), out.len())
    }
}

impl<B: Body> Surface for SourceDoubletPanels<B> {
    fn update_positions(&mut self) {
        self.panels = self.body.points(Frame::Inertial);
    }

    fn update_strengths(
        &mut self,
        _wake: Option<&FreeVortexParticles>,
        _freestream: Vector2<f64>,
        _dt: f64,
    ) -> Result<()> {
        // TODO: source/doublet influence coefficients and solve
        trace!("source/doublet strength update skipped");
        Ok(())
    }

    fn wake_panel(&self) -> Option<PointVortex> {
        None
    }
}
