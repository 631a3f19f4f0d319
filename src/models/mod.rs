//! The three reference architectures plus a name-based dispatcher.
//!
//! Every builder validates its dimensions, resolves the layout once, and
//! then stacks a fixed sequence of layers. Nothing is cached between calls.

pub mod architecture;
pub mod lenet;
pub mod minivggnet;
pub mod shallownet;

pub use architecture::Architecture;
pub use lenet::LeNet;
pub use minivggnet::MiniVGGNet;
pub use shallownet::ShallowNet;

use crate::error::Result;
use crate::layout::convention::{LayoutConvention, ResolvedLayout};
use crate::network::graph::ModelGraph;
use crate::network::image_spec::{ClassCount, ImageSpec};
use crate::network::metadata::ModelMetadata;

/// Validated starting point shared by every builder: an empty graph whose
/// input shape already follows `layout`.
pub(crate) struct Scaffold {
    pub graph: ModelGraph,
    pub layout: ResolvedLayout,
    pub classes: ClassCount,
}

pub(crate) fn scaffold(
    name: &str,
    description: &str,
    width: usize,
    height: usize,
    depth: usize,
    classes: usize,
    layout: LayoutConvention,
) -> Result<Scaffold> {
    let image = ImageSpec::new(width, height, depth)?;
    let classes = ClassCount::new(classes)?;
    let resolved = layout.resolve(&image);
    let graph = ModelGraph::new(name, resolved.input_shape.clone(), layout)
        .with_metadata(ModelMetadata::for_image(description, image));
    Ok(Scaffold { graph, layout: resolved, classes })
}

pub(crate) fn finish(graph: ModelGraph) -> ModelGraph {
    log::info!(
        "built {} with {} layers, {} params, input {}",
        graph.name(),
        graph.len(),
        graph.total_params(),
        graph.input_shape()
    );
    graph
}
