use serde::{Deserialize, Serialize};

use crate::network::image_spec::ImageSpec;

/// Optional annotations carried alongside an architecture.
/// All fields are Option<> so hand-written specs without them still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    /// Image the architecture was built for, when built from dimensions.
    pub image: Option<ImageSpec>,
    /// Human-readable class labels for the output layer (e.g. ["cat","dog"]).
    pub output_labels: Option<Vec<String>>,
}

impl ModelMetadata {
    pub fn for_image(description: &str, image: ImageSpec) -> ModelMetadata {
        ModelMetadata {
            description: Some(description.to_owned()),
            image: Some(image),
            output_labels: None,
        }
    }
}
