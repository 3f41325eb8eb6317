use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point vortex: position and signed circulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointVortex {
    pub position: Vector2<f64>,
    pub strength: f64,
}

impl PointVortex {
    pub fn new(position: Vector2<f64>, strength: f64) -> Self {
        Self { position, strength }
    }
}
