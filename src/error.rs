//! Errors

use thiserror::Error;

/// State of a [Renderer](../renderer/struct.Renderer.html) draw
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// Constructed, nothing processed yet
    Created,
    /// Inside a map draw, between layers
    MapStarted,
    /// Inside a layer
    LayerActive,
    /// Map draw finished
    MapEnded,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Reference system definition could not be parsed
    #[error("invalid projection `{params}`: {reason}")]
    InvalidProjection { params: String, reason: String },
    /// A single point could not be converted between reference systems
    #[error("failed to transform point ({x}, {y})")]
    TransformFailed { x: f64, y: f64 },
    /// Lifecycle hook called out of order
    #[error("render pipeline is {found:?}, expected {expected:?}")]
    InvalidState { expected: RenderState, found: RenderState },
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("unsupported image format `{0}`")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
