pub mod canvas;
pub mod components;
pub mod error;
pub mod los;
pub mod rasterizer;

pub use components::{Position, Segment, Vec3};
pub use error::RasterError;
pub use rasterizer::{Dominant, LineRasterizer};
