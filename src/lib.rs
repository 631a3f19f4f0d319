pub mod activation;
pub mod config;
pub mod error;
pub mod layers;
pub mod layout;
pub mod models;
pub mod network;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use config::backend_config::BackendConfig;
pub use error::{Result, ZooError};
pub use layers::{Layer, LayerError, LayerSpec, Padding, TensorShape};
pub use layout::convention::{LayoutConvention, ResolvedLayout};
pub use models::{Architecture, LeNet, MiniVGGNet, ShallowNet};
pub use network::{ClassCount, ImageSpec, ModelGraph, ModelMetadata, NetworkSpec};
