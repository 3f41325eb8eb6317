//! Regularized point-vortex kernel shared by every vortex collection.

use nalgebra::Vector2;
use std::f64::consts::PI;

use crate::resources::ConfigError;
use crate::utils::{check_len, Result, DEFAULT_CORE_RADIUS};

/// Velocity induced by a single point vortex, with the 1/r singularity
/// replaced by solid-body rotation inside `core_radius`.
///
/// For a vortex of strength Γ the tangential speed is Γ / (2π r) outside the
/// core and Γ r / (2π r₀²) inside it, so the two agree at r = r₀. The velocity
/// at the vortex itself is exactly zero, so a collection may evaluate a member
/// against its own position without an explicit self-exclusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VortexKernel {
    core_radius: f64,
}

impl Default for VortexKernel {
    fn default() -> Self {
        Self {
            core_radius: DEFAULT_CORE_RADIUS,
        }
    }
}

impl VortexKernel {
    /// Fails unless `core_radius` is finite and strictly positive.
    pub fn new(core_radius: f64) -> Result<Self> {
        Ok(Self {
            core_radius: checked_core_radius(core_radius)?,
        })
    }

    pub fn core_radius(&self) -> f64 {
        self.core_radius
    }

    /// On error the previous radius is kept.
    pub fn set_core_radius(&mut self, core_radius: f64) -> Result<()> {
        self.core_radius = checked_core_radius(core_radius)?;
        Ok(())
    }

    /// Velocity at `target` due to a vortex of strength `strength` at `vortex`
    #[inline]
    pub fn velocity_at(
        &self,
        target: &Vector2<f64>,
        vortex: &Vector2<f64>,
        strength: f64,
    ) -> Vector2<f64> {
        let r = target - vortex;
        let rsq = r.norm_squared().max(self.core_radius * self.core_radius);
        // alternative regularization (Krasny, Eldredge): rsq = |r|^2 + r0^2
        strength / (2.0 * PI) * Vector2::new(r.y, -r.x) / rsq
    }

    pub fn induced_velocity_single(
        &self,
        targets: &[Vector2<f64>],
        vortex: &Vector2<f64>,
        strength: f64,
    ) -> Vec<Vector2<f64>> {
        targets
            .iter()
            .map(|x| self.velocity_at(x, vortex, strength))
            .collect()
    }

    /// Accumulating form of [`Self::induced_velocity_single`]
    pub fn add_induced_velocity_single(
        &self,
        targets: &[Vector2<f64>],
        vortex: &Vector2<f64>,
        strength: f64,
        out: &mut [Vector2<f64>],
    ) -> Result<()> {
        check_len(targets.len(), out.len())?;
        for (vel, x) in out.iter_mut().zip(targets) {
            *vel += self.velocity_at(x, vortex, strength);
        }
        Ok(())
    }
}

fn checked_core_radius(core_radius: f64) -> Result<f64> {
    if core_radius.is_finite() && core_radius > 0.0 {
        Ok(core_radius)
    } else {
        Err(ConfigError::InvalidParameter {
            name: "core_radius".to_string(),
            value: core_radius,
        }
        .into())
    }
}
