pub mod error;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod sweep;

pub use error::{Result, SightlineError};
