use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ZooError};
use crate::layout::convention::LayoutConvention;
use crate::models::{LeNet, MiniVGGNet, ShallowNet};
use crate::network::graph::ModelGraph;
use crate::network::image_spec::ImageSpec;

/// Selects one of the built-in architectures by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    ShallowNet,
    LeNet,
    MiniVGGNet,
}

impl Architecture {
    pub const ALL: [Architecture; 3] =
        [Architecture::ShallowNet, Architecture::LeNet, Architecture::MiniVGGNet];

    pub fn name(&self) -> &'static str {
        match self {
            Architecture::ShallowNet => ShallowNet::NAME,
            Architecture::LeNet => LeNet::NAME,
            Architecture::MiniVGGNet => MiniVGGNet::NAME,
        }
    }

    pub fn build(&self, image: ImageSpec, classes: usize, layout: LayoutConvention) -> Result<ModelGraph> {
        let ImageSpec { width, height, depth } = image;
        match self {
            Architecture::ShallowNet => ShallowNet::build(width, height, depth, classes, layout),
            Architecture::LeNet => LeNet::build(width, height, depth, classes, layout),
            Architecture::MiniVGGNet => MiniVGGNet::build(width, height, depth, classes, layout),
        }
    }
}

impl FromStr for Architecture {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Architecture::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Architecture::ALL.iter().map(|a| a.name()).collect();
                ZooError::Configuration(format!(
                    "unknown architecture '{}' (known: {})",
                    s.trim(),
                    known.join(", ")
                ))
            })
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
