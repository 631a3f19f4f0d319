use serde::{Serialize, Deserialize};

use crate::layers::shape::TensorShape;
use crate::layers::spec::LayerSpec;

/// A layer spec after it has been placed in a graph: the shape it produces
/// and how many parameters the framework will allocate for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub spec: LayerSpec,
    pub output_shape: TensorShape,
    pub trainable_params: usize,
    /// Buffers updated outside of gradient descent (moving statistics).
    pub non_trainable_params: usize,
}

impl Layer {
    pub fn new(
        spec: LayerSpec,
        output_shape: TensorShape,
        trainable_params: usize,
        non_trainable_params: usize,
    ) -> Layer {
        Layer { spec, output_shape, trainable_params, non_trainable_params }
    }

    pub fn total_params(&self) -> usize {
        self.trainable_params.saturating_add(self.non_trainable_params)
    }
}
