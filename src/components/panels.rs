//! Bound vortex panels: one lumped vortex per surface panel.
//!
//! Each panel carries a vortex at its quarter chord and enforces
//! no-penetration at its three-quarter chord collocation point, with the
//! quarter and three-quarter points measured from the panel's upstream end.
//! Geometry lives in the body-fixed frame, so rigid motion of the body leaves
//! the influence matrix unchanged; only the right-hand side sees the motion.

use nalgebra::{DMatrix, DVector, Vector2};
use tracing::{debug, trace};

use crate::components::{FreeVortexParticles, PointVortex};
use crate::physics::{Body, Surface, VelocitySource, VortexKernel};
use crate::resources::{Frame, VortexConfig};
use crate::utils::{check_len, perp_cw, solve_dense, unit, EpochCache, Result, VortexError};

pub struct BoundVortexPanels<B: Body> {
    body: B,
    kernel: VortexKernel,
    config: VortexConfig,
    vortex_positions: Vec<Vector2<f64>>,
    collocation_points: Vec<Vector2<f64>>,
    normals: Vec<Vector2<f64>>,
    strengths: Vec<f64>,
    trailing_edge: Vector2<f64>,
    wake_direction: Vector2<f64>,
    closed: bool,
    geometry_epoch: u64,
    influence: EpochCache<DMatrix<f64>>,
    // body frame
    newly_shed: Option<PointVortex>,
}

impl<B: Body> BoundVortexPanels<B> {
    /// Discretize `body` into panels.
    ///
    /// `freestream` only orients the vortex and collocation placement on each
    /// panel; it is not stored.
    pub fn new(body: B, freestream: Vector2<f64>, config: &VortexConfig) -> Result<Self> {
        config.validate()?;
        let mut panels = Self {
            body,
            kernel: VortexKernel::new(config.core_radius)?,
            config: *config,
            vortex_positions: Vec::new(),
            collocation_points: Vec::new(),
            normals: Vec::new(),
            strengths: Vec::new(),
            trailing_edge: Vector2::zeros(),
            wake_direction: Vector2::zeros(),
            closed: false,
            geometry_epoch: 0,
            influence: EpochCache::new(),
            newly_shed: None,
        };
        panels.rebuild(freestream)?;
        Ok(panels)
    }

    /// Recompute all panel geometry from the body's reference (body-frame)
    /// points. Strengths are zeroed and any shed vortex is forgotten.
    pub fn rebuild(&mut self, freestream: Vector2<f64>) -> Result<()> {
        let q = self.body.points(Frame::Body);
        if q.len() < 2 {
            return Err(VortexError::DegenerateGeometry(format!(
                "need at least two boundary points, got {}",
                q.len()
            )));
        }

        let dq: Vec<Vector2<f64>> = q.windows(2).map(|w| w[1] - w[0]).collect();
        let n = dq.len();

        let mut vortex_positions = Vec::with_capacity(n);
        let mut collocation_points = Vec::with_capacity(n);
        let mut normals = Vec::with_capacity(n);

        for (i, &d) in dq.iter().enumerate() {
            let normal = unit(&perp_cw(&d)).ok_or_else(|| {
                VortexError::DegenerateGeometry(format!("panel {} has zero length", i))
            })?;
            let q25 = q[i] + 0.25 * d;
            let q75 = q[i] + 0.75 * d;

            // Panels running against the flow place the vortex at the far end
            if freestream.dot(&d) <= 0.0 {
                vortex_positions.push(q75);
                collocation_points.push(q25);
            } else {
                vortex_positions.push(q25);
                collocation_points.push(q75);
            }
            normals.push(normal);
        }

        let first = q[0];
        let last = q[n];
        self.closed = (first - last).norm() < self.config.closed_body_tolerance;
        let (trailing_edge, wake_direction) = if self.closed {
            (0.5 * (first + last), -0.5 * (dq[0] - dq[n - 1]))
        } else {
            (first, -dq[0])
        };
        self.wake_direction = unit(&wake_direction).ok_or_else(|| {
            VortexError::DegenerateGeometry("wake direction at trailing edge is undefined".into())
        })?;
        self.trailing_edge = trailing_edge;

        self.vortex_positions = vortex_positions;
        self.collocation_points = collocation_points;
        self.normals = normals;
        self.strengths = vec![0.0; n];
        self.newly_shed = None;
        self.geometry_epoch += 1;

        debug!(
            num_panels = n,
            closed = self.closed,
            trailing_edge = ?self.trailing_edge,
            "rebuilt bound vortex panels"
        );
        Ok(())
    }

    /// Mark panel geometry as changed, invalidating the influence matrix.
    ///
    /// Rigid motion never requires this, since panels are stored in the body
    /// frame. Geometry itself is recomputed by [`Self::rebuild`].
    pub fn update_positions(&mut self) {
        self.geometry_epoch += 1;
    }

    pub fn geometry_epoch(&self) -> u64 {
        self.geometry_epoch
    }

    /// Whether the cached influence matrix matches the current geometry
    pub fn influence_matrix_is_cached(&self) -> bool {
        self.influence.is_fresh(self.geometry_epoch)
    }

    /// `A[i, j]`: normal velocity at collocation point `i` induced by a unit
    /// vortex at panel `j`, in the body frame.
    pub fn influence_matrix(&mut self) -> &DMatrix<f64> {
        let kernel = self.kernel;
        let vortices = &self.vortex_positions;
        let collocation = &self.collocation_points;
        let normals = &self.normals;
        self.influence.get_or_compute(self.geometry_epoch, || {
            trace!(num_panels = vortices.len(), "computing influence matrix");
            let n = vortices.len();
            DMatrix::from_fn(n, n, |i, j| {
                kernel
                    .velocity_at(&collocation[i], &vortices[j], 1.0)
                    .dot(&normals[i])
            })
        })
    }

    /// Right-hand side of the no-penetration condition,
    /// `-n · (U_wake + U_inf - U_body)` at each collocation point.
    pub fn compute_rhs(
        &self,
        freestream: Vector2<f64>,
        wake: Option<&dyn VelocitySource>,
    ) -> Result<DVector<f64>> {
        let n = self.num_panels();
        let motion = self.body.motion();
        let (collocation, normals, body_vel) = match motion {
            Some(motion) => {
                // the slice maps may be overridden, so their lengths are checked
                let collocation = motion.map_positions(&self.collocation_points);
                let normals = motion.map_vectors(&self.normals);
                let body_vel = motion.map_velocities(&self.collocation_points);
                check_len(n, collocation.len())?;
                check_len(n, normals.len())?;
                check_len(n, body_vel.len())?;
                (collocation, normals, body_vel)
            }
            None => (
                self.collocation_points.clone(),
                self.normals.clone(),
                vec![Vector2::zeros(); n],
            ),
        };

        let mut vel = vec![Vector2::zeros(); n];
        if let Some(wake) = wake {
            wake.add_induced_velocity(&collocation, &mut vel)?;
        }
        // rigid motion only: the body does not deform
        for (v, vb) in vel.iter_mut().zip(&body_vel) {
            *v -= vb;
        }

        Ok(DVector::from_iterator(
            n,
            vel.iter()
                .zip(&normals)
                .map(|(v, normal)| -(v + freestream).dot(normal)),
        ))
    }

    /// Steady solve of the plain N x N system, with no shedding
    pub fn update_strengths(&mut self, freestream: Vector2<f64>) -> Result<()> {
        let rhs = self.compute_rhs(freestream, None)?;
        let gam = solve_dense(self.influence_matrix(), &rhs)?;
        self.strengths = gam.iter().copied().collect();
        debug!(
            bound_circulation = self.bound_circulation(),
            "steady panel strengths updated"
        );
        Ok(())
    }

    /// Unsteady solve: shed one vortex from the trailing edge and enforce
    /// Kelvin's theorem.
    ///
    /// The new vortex sits `wake_offset_fraction * |U_inf| * dt` downstream of
    /// the trailing edge along the wake direction. The panel strengths plus the
    /// shed strength sum to `total_circulation`, which defaults to zero without
    /// a wake and to minus the wake circulation otherwise. The shed vortex is
    /// recorded but not added to `wake`.
    pub fn update_strengths_unsteady(
        &mut self,
        dt: f64,
        freestream: Vector2<f64>,
        wake: Option<&FreeVortexParticles>,
        total_circulation: Option<f64>,
        wake_offset_fraction: Option<f64>,
    ) -> Result<()> {
        let n = self.num_panels();
        let fraction = wake_offset_fraction.unwrap_or(self.config.wake_offset_fraction);
        let distance = fraction * freestream.norm() * dt;
        let x_shed = self.trailing_edge + distance * self.wake_direction;

        // influence of the shed vortex, in the body frame
        let shed_column: Vec<f64> = self
            .collocation_points
            .iter()
            .zip(&self.normals)
            .map(|(xc, normal)| self.kernel.velocity_at(xc, &x_shed, 1.0).dot(normal))
            .collect();

        // last row: all strengths, shed vortex included, sum to the target
        let influence = self.influence_matrix();
        let a = DMatrix::from_fn(n + 1, n + 1, |i, j| {
            if i == n {
                1.0
            } else if j == n {
                shed_column[i]
            } else {
                influence[(i, j)]
            }
        });

        let rhs_body = self.compute_rhs(freestream, wake.map(|w| w as &dyn VelocitySource))?;
        let circulation = total_circulation
            .unwrap_or_else(|| wake.map_or(0.0, |w| -w.circulation()));
        let rhs = DVector::from_iterator(
            n + 1,
            rhs_body.iter().copied().chain(std::iter::once(circulation)),
        );

        let gam = solve_dense(&a, &rhs)?;
        self.strengths = gam.rows(0, n).iter().copied().collect();
        let shed = PointVortex::new(x_shed, gam[n]);
        self.newly_shed = Some(shed);

        debug!(
            shed_strength = shed.strength,
            bound_circulation = self.bound_circulation(),
            target_circulation = circulation,
            "unsteady panel strengths updated"
        );
        Ok(())
    }

    /// Newly shed vortex, in the inertial frame
    pub fn get_newly_shed(&self) -> Result<PointVortex> {
        let shed = self.newly_shed.ok_or(VortexError::NoShedVortex)?;
        let position = match self.body.motion() {
            Some(motion) => motion.map_position(&shed.position),
            None => shed.position,
        };
        Ok(PointVortex::new(position, shed.strength))
    }

    /// Bound vortex positions (body frame) and strengths
    pub fn vortices(&self) -> (&[Vector2<f64>], &[f64]) {
        (&self.vortex_positions, &self.strengths)
    }

    pub fn collocation_points(&self) -> &[Vector2<f64>] {
        &self.collocation_points
    }

    /// x and y components of the panel normals
    pub fn normals(&self) -> (Vec<f64>, Vec<f64>) {
        self.normals.iter().map(|n| (n.x, n.y)).unzip()
    }

    pub fn num_panels(&self) -> usize {
        self.vortex_positions.len()
    }

    pub fn trailing_edge(&self) -> Vector2<f64> {
        self.trailing_edge
    }

    pub fn wake_direction(&self) -> Vector2<f64> {
        self.wake_direction
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sum of the panel strengths
    pub fn bound_circulation(&self) -> f64 {
        self.strengths.iter().sum()
    }

    pub fn core_radius(&self) -> f64 {
        self.kernel.core_radius()
    }

    /// Changing the core radius changes the influence coefficients, so a
    /// successful change invalidates the cached matrix.
    pub fn set_core_radius(&mut self, core_radius: f64) -> Result<()> {
        self.kernel.set_core_radius(core_radius)?;
        self.geometry_epoch += 1;
        Ok(())
    }

    /// Mutable access for driving the body's motion between steps
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }
}

impl<B: Body> VelocitySource for BoundVortexPanels<B> {
    fn add_induced_velocity(
        &self,
        targets: &[Vector2<f64>],
        out: &mut [Vector2<f64>],
    ) -> Result<()> {
        check_len(targets.len(), out.len())?;
        let positions = match self.body.motion() {
            Some(motion) => motion.map_positions(&self.vortex_positions),
            None => self.vortex_positions.clone(),
        };
        check_len(self.num_panels(), positions.len())?;
        for (xv, gam) in positions.iter().zip(&self.strengths) {
            self.kernel.add_induced_velocity_single(targets, xv, *gam, out)?;
        }
        Ok(())
    }
}

impl<B: Body> Surface for BoundVortexPanels<B> {
    fn update_positions(&mut self) {
        BoundVortexPanels::update_positions(self);
    }

    fn update_strengths(
        &mut self,
        wake: Option<&FreeVortexParticles>,
        freestream: Vector2<f64>,
        dt: f64,
    ) -> Result<()> {
        self.update_strengths_unsteady(dt, freestream, wake, None, None)
    }

    fn wake_panel(&self) -> Option<PointVortex> {
        self.get_newly_shed().ok()
    }
}
