use crate::activation::ActivationFunction;
use crate::error::Result;
use crate::layers::spec::{LayerSpec, Padding};
use crate::layout::convention::LayoutConvention;
use crate::models::{finish, scaffold};
use crate::network::graph::ModelGraph;

/// Filters of the two convolution blocks; each block doubles the previous.
const BLOCK_FILTERS: [usize; 2] = [32, 64];
const BLOCK_DROPOUT: f64 = 0.25;
const HEAD_UNITS: usize = 512;
const HEAD_DROPOUT: f64 = 0.5;

/// A small VGG-style network:
///
/// ```text
/// Input =>
/// [Conv => ReLU => BN] x2 => Pool => Dropout    (32 filters)
/// [Conv => ReLU => BN] x2 => Pool => Dropout    (64 filters)
/// FC => ReLU => BN => Dropout => FC => Softmax
/// ```
///
/// Every normalization layer uses the channel axis of the requested layout,
/// including the one in the head where the tensor is already flat.
pub struct MiniVGGNet;

impl MiniVGGNet {
    pub const NAME: &'static str = "minivggnet";

    pub fn build(
        width: usize,
        height: usize,
        depth: usize,
        classes: usize,
        layout: LayoutConvention,
    ) -> Result<ModelGraph> {
        let s = scaffold(
            Self::NAME,
            "MiniVGGNet: two double-conv blocks with batch norm and dropout, then a 512-unit head",
            width,
            height,
            depth,
            classes,
            layout,
        )?;
        let axis = s.layout.channel_axis;
        let mut model = s.graph;

        for filters in BLOCK_FILTERS {
            for _ in 0..2 {
                model.add(LayerSpec::conv2d(filters, (3, 3), Padding::Same))?;
                model.add(LayerSpec::activation(ActivationFunction::ReLU))?;
                model.add(LayerSpec::batch_normalization(axis))?;
            }
            model.add(LayerSpec::max_pooling2d((2, 2), None))?;
            model.add(LayerSpec::dropout(BLOCK_DROPOUT))?;
        }

        model.add(LayerSpec::flatten())?;
        model.add(LayerSpec::dense(HEAD_UNITS))?;
        model.add(LayerSpec::activation(ActivationFunction::ReLU))?;
        model.add(LayerSpec::batch_normalization(axis))?;
        model.add(LayerSpec::dropout(HEAD_DROPOUT))?;

        model.add(LayerSpec::dense(s.classes.get()))?;
        model.add(LayerSpec::activation(ActivationFunction::Softmax))?;

        Ok(finish(model))
    }
}
