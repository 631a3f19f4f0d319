use std::fmt::Write as _;

use crate::error::{Result, ZooError};
use crate::layers::error::LayerError;
use crate::layers::layer::Layer;
use crate::layers::shape::TensorShape;
use crate::layers::spec::LayerSpec;
use crate::layout::convention::LayoutConvention;
use crate::network::metadata::ModelMetadata;
use crate::network::spec::NetworkSpec;

/// An ordered stack of realized layers with its input shape.
///
/// Layers can only be appended through [`ModelGraph::add`], which runs shape
/// inference against the current output, so every stored `output_shape` is
/// consistent with the layer before it. The graph holds no weights.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelGraph {
    name: String,
    input_shape: TensorShape,
    layout: LayoutConvention,
    layers: Vec<Layer>,
    metadata: Option<ModelMetadata>,
}

impl ModelGraph {
    pub fn new(name: &str, input_shape: TensorShape, layout: LayoutConvention) -> ModelGraph {
        ModelGraph {
            name: name.to_owned(),
            input_shape,
            layout,
            layers: Vec::new(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> ModelGraph {
        self.metadata = Some(metadata);
        self
    }

    /// Appends `spec`, realizing it against the current output shape.
    ///
    /// On failure the graph is left unchanged and the error names the
    /// position the layer would have taken.
    pub fn add(&mut self, spec: LayerSpec) -> Result<()> {
        let index = self.layers.len();
        let layer = spec
            .realize(self.output_shape(), self.layout)
            .map_err(|reason| ZooError::LayerConstruction {
                index,
                layer: spec.to_string(),
                reason,
            })?;
        // Keep the graph totals representable so the sums below stay exact.
        if self.total_params().checked_add(layer.total_params()).is_none() {
            return Err(ZooError::LayerConstruction {
                index,
                layer: spec.to_string(),
                reason: LayerError::Overflow("model parameter count"),
            });
        }
        log::debug!(
            "{}: layer {} {} -> {} ({} params)",
            self.name,
            index,
            layer.spec,
            layer.output_shape,
            layer.total_params()
        );
        self.layers.push(layer);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_shape(&self) -> &TensorShape {
        &self.input_shape
    }

    /// Shape produced by the last layer, or the input shape when empty.
    pub fn output_shape(&self) -> &TensorShape {
        self.layers.last().map(|l| &l.output_shape).unwrap_or(&self.input_shape)
    }

    pub fn layout(&self) -> LayoutConvention {
        self.layout
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.metadata.as_ref()
    }

    pub fn trainable_params(&self) -> usize {
        self.layers.iter().fold(0, |acc, l| acc.saturating_add(l.trainable_params))
    }

    pub fn non_trainable_params(&self) -> usize {
        self.layers.iter().fold(0, |acc, l| acc.saturating_add(l.non_trainable_params))
    }

    pub fn total_params(&self) -> usize {
        self.trainable_params().saturating_add(self.non_trainable_params())
    }

    /// Drops the realized shapes, keeping only what is needed to rebuild.
    pub fn to_spec(&self) -> NetworkSpec {
        NetworkSpec {
            name: self.name.clone(),
            input_shape: self.input_shape.clone(),
            layout: self.layout,
            layers: self.layers.iter().map(|l| l.spec.clone()).collect(),
            metadata: self.metadata.clone(),
        }
    }

    /// Tabular per-layer overview with parameter totals.
    pub fn summary(&self) -> String {
        let rule_heavy = "=".repeat(78);
        let rule_light = "_".repeat(78);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "Model: \"{}\" ({})", self.name, self.layout);
        let _ = writeln!(out, "Input shape: {}", self.input_shape);
        let _ = writeln!(out, "{}", rule_light);
        let _ = writeln!(out, "{:<4}{:<40}{:<24}{:>10}", "#", "Layer", "Output Shape", "Param #");
        let _ = writeln!(out, "{}", rule_heavy);
        for (i, layer) in self.layers.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<4}{:<40}{:<24}{:>10}",
                i,
                layer.spec.to_string(),
                layer.output_shape.to_string(),
                layer.total_params()
            );
        }
        let _ = writeln!(out, "{}", rule_heavy);
        let _ = writeln!(out, "Total params: {}", self.total_params());
        let _ = writeln!(out, "Trainable params: {}", self.trainable_params());
        let _ = writeln!(out, "Non-trainable params: {}", self.non_trainable_params());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationFunction;
    use crate::layers::spec::Padding;

    fn graph() -> ModelGraph {
        ModelGraph::new("tiny", TensorShape::new(vec![8, 8, 3]), LayoutConvention::ChannelsLast)
    }

    #[test]
    fn empty_graph_outputs_its_input() {
        let g = graph();
        assert!(g.is_empty());
        assert_eq!(g.output_shape().dims(), &[8, 8, 3]);
        assert_eq!(g.total_params(), 0);
    }

    #[test]
    fn add_tracks_the_evolving_shape() {
        let mut g = graph();
        g.add(LayerSpec::conv2d(4, (3, 3), Padding::Same)).unwrap();
        g.add(LayerSpec::max_pooling2d((2, 2), None)).unwrap();
        g.add(LayerSpec::flatten()).unwrap();
        g.add(LayerSpec::dense(2)).unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.layers()[1].output_shape.dims(), &[4, 4, 4]);
        assert_eq!(g.output_shape().dims(), &[2]);
        assert_eq!(g.total_params(), (3 * 3 * 3 * 4 + 4) + (64 * 2 + 2));
    }

    #[test]
    fn failed_add_leaves_graph_untouched() {
        let mut g = graph();
        g.add(LayerSpec::activation(ActivationFunction::ReLU)).unwrap();
        let before = g.clone();
        match g.add(LayerSpec::dense(10)) {
            Err(ZooError::LayerConstruction { index, layer, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(layer, "Dense(10)");
            }
            other => panic!("expected LayerConstruction, got {:?}", other),
        }
        assert_eq!(g, before);
    }

    #[test]
    fn parameter_total_overflow_is_rejected() {
        let half = usize::MAX / 2;
        let mut g = ModelGraph::new("wide", TensorShape::new(vec![half]), LayoutConvention::ChannelsLast);
        g.add(LayerSpec::dense(1)).unwrap();
        // Fits on its own (1 * half + half) but not on top of the first layer.
        match g.add(LayerSpec::dense(half)) {
            Err(ZooError::LayerConstruction { index, reason, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(reason, LayerError::Overflow("model parameter count"));
            }
            other => panic!("expected LayerConstruction, got {:?}", other),
        }
        assert_eq!(g.len(), 1);
        assert_eq!(g.total_params(), half + 1);
    }

    #[test]
    fn summary_lists_every_layer_and_totals() {
        let mut g = graph();
        g.add(LayerSpec::flatten()).unwrap();
        g.add(LayerSpec::dense(3)).unwrap();
        let text = g.summary();
        assert!(text.contains("Model: \"tiny\" (channels_last)"));
        assert!(text.contains("Flatten"));
        assert!(text.contains("(None, 3)"));
        assert!(text.contains("Total params: 579"));
    }
}
