pub mod body;
pub mod doublet;
pub mod panels;
pub mod vortex;
pub mod wake;

pub use body::PolygonBody;
pub use doublet::SourceDoubletPanels;
pub use panels::BoundVortexPanels;
pub use vortex::PointVortex;
pub use wake::FreeVortexParticles;
