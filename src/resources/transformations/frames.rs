use nalgebra::{UnitComplex, Vector2};
use serde::{Deserialize, Serialize};

use crate::resources::transformations::traits::MotionTransform;

/// Rigid-body motion of a 2D body: the pose of the body frame in the inertial
/// frame together with its rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidMotion {
    /// Inertial position of the body-frame origin
    pub position: Vector2<f64>,

    /// Inertial velocity of the body-frame origin
    pub velocity: Vector2<f64>,

    /// Rotation from body to inertial frame [rad, counter-clockwise]
    pub angle: f64,

    /// Angular velocity [rad/s, counter-clockwise]
    pub angular_velocity: f64,
}

impl Default for RigidMotion {
    fn default() -> Self {
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::zeros(),
            angle: 0.0,
            angular_velocity: 0.0,
        }
    }
}

impl RigidMotion {
    pub fn new(
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        angle: f64,
        angular_velocity: f64,
    ) -> Self {
        Self {
            position,
            velocity,
            angle,
            angular_velocity,
        }
    }

    /// Body translating at constant velocity with no rotation
    pub fn translating(position: Vector2<f64>, velocity: Vector2<f64>) -> Self {
        Self {
            position,
            velocity,
            ..Default::default()
        }
    }

    pub fn rotation(&self) -> UnitComplex<f64> {
        UnitComplex::new(self.angle)
    }

    /// Advance the pose at constant rates over `dt`
    pub fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.angle += self.angular_velocity * dt;
    }
}

impl MotionTransform for RigidMotion {
    fn map_position(&self, position: &Vector2<f64>) -> Vector2<f64> {
        self.position + self.rotation() * *position
    }

    fn map_vector(&self, vector: &Vector2<f64>) -> Vector2<f64> {
        self.rotation() * *vector
    }

    fn map_velocity(&self, position: &Vector2<f64>) -> Vector2<f64> {
        // v + omega x r, with r the rotated body-frame offset
        let r = self.rotation() * *position;
        self.velocity + self.angular_velocity * Vector2::new(-r.y, r.x)
    }
}
