pub mod cache;
pub mod constants;
pub mod errors;
pub mod math;

pub use cache::EpochCache;
pub use constants::*;
pub use errors::*;
pub use math::*;
