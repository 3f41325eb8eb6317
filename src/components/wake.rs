use nalgebra::Vector2;
use tracing::trace;

use crate::components::{BoundVortexPanels, PointVortex};
use crate::physics::{Body, VelocitySource, VortexKernel};
use crate::resources::VortexConfig;
use crate::utils::{check_len, Result};

/// Free vortex particles making up a rolled-up wake.
///
/// Particles are only ever appended; indices stay stable until `reset`.
#[derive(Debug, Clone, Default)]
pub struct FreeVortexParticles {
    kernel: VortexKernel,
    positions: Vec<Vector2<f64>>,
    strengths: Vec<f64>,
    circulation: f64,
}

impl FreeVortexParticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &VortexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            kernel: VortexKernel::new(config.core_radius)?,
            ..Default::default()
        })
    }

    /// Remove every particle
    pub fn reset(&mut self) {
        self.positions.clear();
        self.strengths.clear();
        self.circulation = 0.0;
    }

    /// Total circulation of the particles
    pub fn circulation(&self) -> f64 {
        self.circulation
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn add_vortex(&mut self, position: Vector2<f64>, strength: f64) {
        self.positions.push(position);
        self.strengths.push(strength);
        self.circulation += strength;
    }

    /// Append the vortex most recently shed by `body`
    pub fn add_newly_shed<B: Body>(&mut self, body: &BoundVortexPanels<B>) -> Result<()> {
        let shed = body.get_newly_shed()?;
        self.add_vortex(shed.position, shed.strength);
        Ok(())
    }

    /// Advance the particles one explicit Euler step.
    ///
    /// Velocities for every particle are evaluated from the configuration at
    /// the start of the step: self-induced, plus `body` if given, plus the
    /// free-stream. The self term of each particle vanishes because the
    /// kernel is exactly zero at zero separation.
    pub fn advect(
        &mut self,
        dt: f64,
        freestream: Vector2<f64>,
        body: Option<&dyn VelocitySource>,
    ) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        let mut vel = self.induced_velocity(&self.positions)?;
        if let Some(body) = body {
            body.add_induced_velocity(&self.positions, &mut vel)?;
        }
        if freestream != Vector2::zeros() {
            for v in vel.iter_mut() {
                *v += freestream;
            }
        }

        for (x, v) in self.positions.iter_mut().zip(&vel) {
            *x += v * dt;
        }
        trace!(num_particles = self.len(), dt, "advected wake");
        Ok(())
    }

    /// Particle positions and strengths
    pub fn vortices(&self) -> (&[Vector2<f64>], &[f64]) {
        (&self.positions, &self.strengths)
    }

    pub fn iter(&self) -> impl Iterator<Item = PointVortex> + '_ {
        self.positions
            .iter()
            .zip(&self.strengths)
            .map(|(x, gam)| PointVortex::new(*x, *gam))
    }

    pub fn core_radius(&self) -> f64 {
        self.kernel.core_radius()
    }

    pub fn set_core_radius(&mut self, core_radius: f64) -> Result<()> {
        self.kernel.set_core_radius(core_radius)
    }
}

impl VelocitySource for FreeVortexParticles {
    fn add_induced_velocity(
        &self,
        targets: &[Vector2<f64>],
        out: &mut [Vector2<f64>],
    ) -> Result<()> {
        check_len(targets.len(), out.len())?;
        for (xv, gam) in self.positions.iter().zip(&self.strengths) {
            self.kernel.add_induced_velocity_single(targets, xv, *gam, out)?;
        }
        Ok(())
    }
}
