use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::physics::Body;
use crate::resources::{Frame, MotionTransform, RigidMotion};

/// A rigid body described by its boundary polygon in the body frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonBody {
    /// Boundary points in body frame, ordered from the trailing edge
    pub points: Vec<Vector2<f64>>,

    /// Rigid-body motion; `None` keeps the body fixed in the inertial frame
    pub motion: Option<RigidMotion>,
}

impl PolygonBody {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            motion: None,
        }
    }

    pub fn with_motion(mut self, motion: RigidMotion) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Flat plate of unit-free `chord`, discretized into `num_panels` panels.
    ///
    /// Points run from the trailing edge at (chord, 0) to the leading edge at
    /// the origin, so the body is open and sheds from its first point.
    pub fn flat_plate(chord: f64, num_panels: usize) -> Self {
        let n = num_panels.max(1);
        let points = (0..=n)
            .map(|i| Vector2::new(chord * (1.0 - i as f64 / n as f64), 0.0))
            .collect();
        Self::new(points)
    }

    /// Closed polygon; the first point is repeated at the end.
    pub fn closed_polygon(mut points: Vec<Vector2<f64>>) -> Self {
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        Self::new(points)
    }

    pub fn motion_mut(&mut self) -> Option<&mut RigidMotion> {
        self.motion.as_mut()
    }
}

impl Body for PolygonBody {
    fn points(&self, frame: Frame) -> Vec<Vector2<f64>> {
        match (frame, &self.motion) {
            (Frame::Inertial, Some(motion)) => motion.map_positions(&self.points),
            _ => self.points.clone(),
        }
    }

    fn motion(&self) -> Option<&dyn MotionTransform> {
        self.motion.as_ref().map(|m| m as &dyn MotionTransform)
    }
}
