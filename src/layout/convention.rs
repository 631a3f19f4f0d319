use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ZooError};
use crate::layers::shape::TensorShape;
use crate::network::image_spec::ImageSpec;

/// How the three numbers of an image are ordered inside a tensor.
///
/// Serialized as `"channels_last"` / `"channels_first"`, the same strings a
/// framework backend configuration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutConvention {
    /// `(height, width, depth)`; channel axis is the last one.
    #[default]
    ChannelsLast,
    /// `(depth, height, width)`; channel axis is 1.
    ChannelsFirst,
}

/// Input shape and normalization axis shared by every layer of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub input_shape: TensorShape,
    /// Framework axis (batch = 0) holding the channels.
    pub channel_axis: isize,
}

impl LayoutConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutConvention::ChannelsLast => "channels_last",
            LayoutConvention::ChannelsFirst => "channels_first",
        }
    }

    /// Orders `image` into an input shape and picks the channel axis.
    pub fn resolve(&self, image: &ImageSpec) -> ResolvedLayout {
        match self {
            LayoutConvention::ChannelsLast => ResolvedLayout {
                input_shape: TensorShape::new(vec![image.height, image.width, image.depth]),
                channel_axis: -1,
            },
            LayoutConvention::ChannelsFirst => ResolvedLayout {
                input_shape: TensorShape::new(vec![image.depth, image.height, image.width]),
                channel_axis: 1,
            },
        }
    }

    /// Splits a rank-3 feature map into `(height, width, channels)`.
    pub fn split(&self, shape: &TensorShape) -> Option<(usize, usize, usize)> {
        match (self, shape.dims()) {
            (LayoutConvention::ChannelsLast, &[h, w, c]) => Some((h, w, c)),
            (LayoutConvention::ChannelsFirst, &[c, h, w]) => Some((h, w, c)),
            _ => None,
        }
    }

    /// Inverse of [`split`](Self::split).
    pub fn join(&self, height: usize, width: usize, channels: usize) -> TensorShape {
        match self {
            LayoutConvention::ChannelsLast => TensorShape::new(vec![height, width, channels]),
            LayoutConvention::ChannelsFirst => TensorShape::new(vec![channels, height, width]),
        }
    }
}

impl FromStr for LayoutConvention {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "channels_last" => Ok(LayoutConvention::ChannelsLast),
            "channels_first" => Ok(LayoutConvention::ChannelsFirst),
            other => Err(ZooError::Configuration(format!(
                "unknown image data format '{}' (expected 'channels_last' or 'channels_first')",
                other
            ))),
        }
    }
}

impl fmt::Display for LayoutConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
