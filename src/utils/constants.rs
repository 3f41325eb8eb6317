pub const DEFAULT_CORE_RADIUS: f64 = 1.0e-3; // vortex regularization radius
pub const DEFAULT_CLOSED_BODY_TOLERANCE: f64 = 0.005; // first/last point gap, body lengths
pub const DEFAULT_WAKE_OFFSET_FRACTION: f64 = 0.25; // shed distance as a fraction of |U|*dt
