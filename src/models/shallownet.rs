use crate::activation::ActivationFunction;
use crate::error::Result;
use crate::layers::spec::{LayerSpec, Padding};
use crate::layout::convention::LayoutConvention;
use crate::models::{finish, scaffold};
use crate::network::graph::ModelGraph;

/// Input => Conv => ReLU => FC => Softmax
pub struct ShallowNet;

impl ShallowNet {
    pub const NAME: &'static str = "shallownet";

    pub fn build(
        width: usize,
        height: usize,
        depth: usize,
        classes: usize,
        layout: LayoutConvention,
    ) -> Result<ModelGraph> {
        let s = scaffold(
            Self::NAME,
            "ShallowNet: one convolution stage and a softmax classifier",
            width,
            height,
            depth,
            classes,
            layout,
        )?;
        let mut model = s.graph;

        model.add(LayerSpec::conv2d(32, (3, 3), Padding::Same))?;
        model.add(LayerSpec::activation(ActivationFunction::ReLU))?;

        model.add(LayerSpec::flatten())?;
        model.add(LayerSpec::dense(s.classes.get()))?;
        model.add(LayerSpec::activation(ActivationFunction::Softmax))?;

        Ok(finish(model))
    }
}
