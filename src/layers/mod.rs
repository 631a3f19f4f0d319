pub mod error;
pub mod layer;
pub mod shape;
pub mod spec;

pub use layer::Layer;
pub use shape::TensorShape;
pub use spec::{LayerSpec, Padding};
pub use error::LayerError;
