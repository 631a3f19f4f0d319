use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{Result, ZooError};
use crate::layers::shape::TensorShape;
use crate::layers::spec::LayerSpec;
use crate::layout::convention::LayoutConvention;
use crate::network::graph::ModelGraph;
use crate::network::metadata::ModelMetadata;

/// A fully serializable description of an architecture.
///
/// Only the layer sequence is stored; output shapes and parameter counts are
/// recomputed by [`NetworkSpec::realize`], so a hand-edited file that no
/// longer fits together is rejected on load instead of silently trusted.
/// Weights are never part of a spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Per-sample input shape, already ordered for `layout`.
    pub input_shape: TensorShape,
    #[serde(default)]
    pub layout: LayoutConvention,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

/// On-disk form read by [`NetworkSpec::load_json`]. `layout` stays text so an
/// unknown convention is reported as a configuration error, not a JSON one.
#[derive(Deserialize)]
struct StoredSpec {
    name: String,
    input_shape: TensorShape,
    #[serde(default)]
    layout: Option<String>,
    layers: Vec<LayerSpec>,
    #[serde(default)]
    metadata: Option<ModelMetadata>,
}

impl TryFrom<StoredSpec> for NetworkSpec {
    type Error = ZooError;

    fn try_from(stored: StoredSpec) -> Result<NetworkSpec> {
        let layout = match stored.layout {
            Some(raw) => raw.parse()?,
            None => LayoutConvention::default(),
        };
        Ok(NetworkSpec {
            name: stored.name,
            input_shape: stored.input_shape,
            layout,
            layers: stored.layers,
            metadata: stored.metadata,
        })
    }
}

impl NetworkSpec {
    /// Parses a spec from JSON text, validating the layout name.
    pub fn from_json_str(json: &str) -> Result<NetworkSpec> {
        serde_json::from_str::<StoredSpec>(json)?.try_into()
    }

    /// Replays every layer into a fresh graph.
    pub fn realize(&self) -> Result<ModelGraph> {
        let mut graph = ModelGraph::new(&self.name, self.input_shape.clone(), self.layout);
        if let Some(metadata) = &self.metadata {
            graph = graph.with_metadata(metadata.clone());
        }
        for spec in &self.layers {
            graph.add(spec.clone())?;
        }
        Ok(graph)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader::<_, StoredSpec>(reader)?.try_into()
    }
}
