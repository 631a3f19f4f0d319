use thiserror::Error;

use crate::layers::shape::TensorShape;
use crate::layout::convention::LayoutConvention;

/// Why a single layer could not be realized against its input shape.
///
/// [`ModelGraph::add`](crate::network::graph::ModelGraph::add) wraps this in
/// `ZooError::LayerConstruction` together with the layer's position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayerError {
    #[error("{what} must be at least 1")]
    Zero { what: &'static str },

    #[error("expects a rank-3 {layout} feature map but received {received}")]
    NotAFeatureMap { layout: LayoutConvention, received: TensorShape },

    #[error("window {window_h}x{window_w} is larger than the {map_h}x{map_w} feature map")]
    WindowTooLarge {
        window_h: usize,
        window_w: usize,
        map_h: usize,
        map_w: usize,
    },

    #[error("expects a flat input but received {0}; add a Flatten layer first")]
    NotFlat(TensorShape),

    #[error("axis {axis} is out of range for input {input}")]
    AxisOutOfRange { axis: isize, input: TensorShape },

    #[error("rate {0} is outside [0, 1)")]
    InvalidRate(f64),

    #[error("{0} does not fit in a usize")]
    Overflow(&'static str),
}
