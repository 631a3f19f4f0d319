pub mod graph;
pub mod image_spec;
pub mod metadata;
pub mod spec;

pub use graph::ModelGraph;
pub use image_spec::{ClassCount, ImageSpec};
pub use metadata::ModelMetadata;
pub use spec::NetworkSpec;
