pub mod backend_config;

pub use backend_config::{resolve_layout, BackendConfig, IMAGE_DATA_FORMAT_ENV};
