use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterError {
    /// an accessor was called while the rasterizer had no current fragment,
    /// i.e. after the line was exhausted and before it was re-initialized
    #[error("LineRasterizer::{accessor}(): invalid state")]
    InvalidState { accessor: &'static str },
}
