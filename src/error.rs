use thiserror::Error;

use crate::layers::error::LayerError;

/// Everything that can go wrong while assembling or loading an architecture.
#[derive(Debug, Error)]
pub enum ZooError {
    /// A width, height, depth or class count that is not a positive integer.
    #[error("Invalid dimension: {name} must be a positive integer, got {value}")]
    InvalidDimension { name: &'static str, value: String },

    /// Unrecognized layout convention or malformed backend configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A layer could not be realized against the shape flowing into it.
    #[error("Cannot construct layer {index} ({layer}): {reason}")]
    LayerConstruction {
        index: usize,
        layer: String,
        #[source]
        reason: LayerError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ZooError>;
