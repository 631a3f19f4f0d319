use crate::activation::ActivationFunction;
use crate::error::Result;
use crate::layers::spec::{LayerSpec, Padding};
use crate::layout::convention::LayoutConvention;
use crate::models::{finish, scaffold};
use crate::network::graph::ModelGraph;

/// Input => Conv => ReLU => Pool => Conv => ReLU => Pool
/// => FC => ReLU => FC => Softmax
///
/// Filter counts (20, then 50) and the 500-unit hidden layer are fixed.
pub struct LeNet;

impl LeNet {
    pub const NAME: &'static str = "lenet";

    pub fn build(
        width: usize,
        height: usize,
        depth: usize,
        classes: usize,
        layout: LayoutConvention,
    ) -> Result<ModelGraph> {
        let s = scaffold(
            Self::NAME,
            "LeNet: two conv/pool stages, a 500-unit hidden layer and a softmax classifier",
            width,
            height,
            depth,
            classes,
            layout,
        )?;
        let mut model = s.graph;

        for filters in [20, 50] {
            model.add(LayerSpec::conv2d(filters, (5, 5), Padding::Same))?;
            model.add(LayerSpec::activation(ActivationFunction::ReLU))?;
            model.add(LayerSpec::max_pooling2d((2, 2), Some((2, 2))))?;
        }

        model.add(LayerSpec::flatten())?;
        model.add(LayerSpec::dense(500))?;
        model.add(LayerSpec::activation(ActivationFunction::ReLU))?;

        model.add(LayerSpec::dense(s.classes.get()))?;
        model.add(LayerSpec::activation(ActivationFunction::Softmax))?;

        Ok(finish(model))
    }
}
