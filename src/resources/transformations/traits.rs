use nalgebra::Vector2;

/// Selects which frame boundary points are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Body,     // Fixed to the moving body
    Inertial, // Ground-fixed frame the free-stream is measured in
}

/// Maps body-frame quantities of a moving body into the inertial frame
pub trait MotionTransform {
    /// Inertial position of a body-fixed point
    fn map_position(&self, position: &Vector2<f64>) -> Vector2<f64>;

    /// Rotate a body-frame direction (e.g. a panel normal) into the inertial frame
    fn map_vector(&self, vector: &Vector2<f64>) -> Vector2<f64>;

    /// Inertial velocity of the material point at body-frame `position`
    fn map_velocity(&self, position: &Vector2<f64>) -> Vector2<f64>;

    fn map_positions(&self, positions: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        positions.iter().map(|p| self.map_position(p)).collect()
    }

    fn map_vectors(&self, vectors: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        vectors.iter().map(|v| self.map_vector(v)).collect()
    }

    fn map_velocities(&self, positions: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        positions.iter().map(|p| self.map_velocity(p)).collect()
    }
}
