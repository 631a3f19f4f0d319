use serde::{Serialize, Deserialize};
use std::fmt;

use crate::activation::activation::ActivationFunction;
use crate::layers::error::LayerError;
use crate::layers::layer::Layer;
use crate::layers::shape::TensorShape;
use crate::layout::convention::LayoutConvention;

/// Border handling of a convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Zero-pad so the output keeps the input's spatial size.
    Same,
    /// No padding; the output shrinks by `kernel - 1`.
    Valid,
}

/// Describes one layer of a sequential architecture.
///
/// Layer kinds form a closed set so every match over them is exhaustive.
/// A spec carries no weights; [`LayerSpec::realize`] turns it into a
/// [`Layer`] once the shape flowing into it is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerSpec {
    /// 2D convolution with unit stride.
    #[serde(rename = "conv2d")]
    Conv2D {
        filters: usize,
        kernel_size: (usize, usize),
        padding: Padding,
    },
    #[serde(rename = "max_pooling2d")]
    MaxPooling2D {
        pool_size: (usize, usize),
        strides: (usize, usize),
    },
    Flatten,
    Dense { units: usize },
    Activation { function: ActivationFunction },
    /// `axis` counts the batch axis as 0; negatives index from the end.
    BatchNormalization { axis: isize },
    Dropout { rate: f64 },
}

impl LayerSpec {
    pub fn conv2d(filters: usize, kernel_size: (usize, usize), padding: Padding) -> LayerSpec {
        LayerSpec::Conv2D { filters, kernel_size, padding }
    }

    /// Max pooling; `strides` defaults to `pool_size` when `None`.
    pub fn max_pooling2d(pool_size: (usize, usize), strides: Option<(usize, usize)>) -> LayerSpec {
        LayerSpec::MaxPooling2D { pool_size, strides: strides.unwrap_or(pool_size) }
    }

    pub fn flatten() -> LayerSpec {
        LayerSpec::Flatten
    }

    pub fn dense(units: usize) -> LayerSpec {
        LayerSpec::Dense { units }
    }

    pub fn activation(function: ActivationFunction) -> LayerSpec {
        LayerSpec::Activation { function }
    }

    pub fn batch_normalization(axis: isize) -> LayerSpec {
        LayerSpec::BatchNormalization { axis }
    }

    pub fn dropout(rate: f64) -> LayerSpec {
        LayerSpec::Dropout { rate }
    }

    /// Framework class name shown in summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            LayerSpec::Conv2D { .. } => "Conv2D",
            LayerSpec::MaxPooling2D { .. } => "MaxPooling2D",
            LayerSpec::Flatten => "Flatten",
            LayerSpec::Dense { .. } => "Dense",
            LayerSpec::Activation { .. } => "Activation",
            LayerSpec::BatchNormalization { .. } => "BatchNormalization",
            LayerSpec::Dropout { .. } => "Dropout",
        }
    }

    /// Infers the output shape and parameter counts for `input`.
    ///
    /// [`ModelGraph::add`] attaches the layer index to any error.
    ///
    /// [`ModelGraph::add`]: crate::network::graph::ModelGraph::add
    pub fn realize(&self, input: &TensorShape, layout: LayoutConvention) -> Result<Layer, LayerError> {
        match *self {
            LayerSpec::Conv2D { filters, kernel_size: (kh, kw), padding } => {
                if filters == 0 {
                    return Err(LayerError::Zero { what: "filters" });
                }
                if kh == 0 || kw == 0 {
                    return Err(LayerError::Zero { what: "kernel side" });
                }
                let (h, w, c) = spatial(input, layout)?;
                let (out_h, out_w) = match padding {
                    Padding::Same => (h, w),
                    Padding::Valid => {
                        fits(kh, kw, h, w)?;
                        (h - kh + 1, w - kw + 1)
                    }
                };
                // kh * kw * c * filters weights + filters biases
                let params = kh
                    .checked_mul(kw)
                    .and_then(|n| n.checked_mul(c))
                    .and_then(|n| n.checked_mul(filters))
                    .and_then(|n| n.checked_add(filters))
                    .ok_or(LayerError::Overflow("convolution parameter count"))?;
                Ok(Layer::new(self.clone(), layout.join(out_h, out_w, filters), params, 0))
            }
            LayerSpec::MaxPooling2D { pool_size: (ph, pw), strides: (sh, sw) } => {
                if ph == 0 || pw == 0 {
                    return Err(LayerError::Zero { what: "pool side" });
                }
                if sh == 0 || sw == 0 {
                    return Err(LayerError::Zero { what: "stride" });
                }
                let (h, w, c) = spatial(input, layout)?;
                fits(ph, pw, h, w)?;
                let out_h = (h - ph) / sh + 1;
                let out_w = (w - pw) / sw + 1;
                Ok(Layer::new(self.clone(), layout.join(out_h, out_w, c), 0, 0))
            }
            LayerSpec::Flatten => {
                let flat = input
                    .elements()
                    .ok_or(LayerError::Overflow("flattened size"))?;
                Ok(Layer::new(self.clone(), TensorShape::new(vec![flat]), 0, 0))
            }
            LayerSpec::Dense { units } => {
                if units == 0 {
                    return Err(LayerError::Zero { what: "units" });
                }
                let fan_in = match input.dims() {
                    &[n] => n,
                    _ => return Err(LayerError::NotFlat(input.clone())),
                };
                let params = fan_in
                    .checked_mul(units)
                    .and_then(|n| n.checked_add(units))
                    .ok_or(LayerError::Overflow("dense parameter count"))?;
                Ok(Layer::new(self.clone(), TensorShape::new(vec![units]), params, 0))
            }
            LayerSpec::Activation { .. } => Ok(Layer::new(self.clone(), input.clone(), 0, 0)),
            LayerSpec::BatchNormalization { axis } => {
                let idx = input
                    .feature_axis(axis)
                    .ok_or_else(|| LayerError::AxisOutOfRange { axis, input: input.clone() })?;
                let features = input.dims()[idx];
                // 4 * features must fit so Layer::total_params cannot overflow.
                if features.checked_mul(4).is_none() {
                    return Err(LayerError::Overflow("normalization parameter count"));
                }
                // gamma/beta train; moving mean/variance do not.
                Ok(Layer::new(self.clone(), input.clone(), 2 * features, 2 * features))
            }
            LayerSpec::Dropout { rate } => {
                if !(0.0..1.0).contains(&rate) {
                    return Err(LayerError::InvalidRate(rate));
                }
                Ok(Layer::new(self.clone(), input.clone(), 0, 0))
            }
        }
    }
}

fn spatial(input: &TensorShape, layout: LayoutConvention) -> Result<(usize, usize, usize), LayerError> {
    layout.split(input).ok_or_else(|| LayerError::NotAFeatureMap {
        layout,
        received: input.clone(),
    })
}

fn fits(window_h: usize, window_w: usize, map_h: usize, map_w: usize) -> Result<(), LayerError> {
    if window_h > map_h || window_w > map_w {
        Err(LayerError::WindowTooLarge { window_h, window_w, map_h, map_w })
    } else {
        Ok(())
    }
}

impl fmt::Display for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSpec::Conv2D { filters, kernel_size: (kh, kw), padding } => {
                let pad = match padding {
                    Padding::Same => "same",
                    Padding::Valid => "valid",
                };
                write!(f, "Conv2D({}, {}x{}, {})", filters, kh, kw, pad)
            }
            LayerSpec::MaxPooling2D { pool_size: (ph, pw), strides: (sh, sw) } => {
                write!(f, "MaxPooling2D({}x{}, stride {}x{})", ph, pw, sh, sw)
            }
            LayerSpec::Flatten => write!(f, "Flatten"),
            LayerSpec::Dense { units } => write!(f, "Dense({})", units),
            LayerSpec::Activation { function } => write!(f, "Activation({})", function),
            LayerSpec::BatchNormalization { axis } => write!(f, "BatchNormalization(axis={})", axis),
            LayerSpec::Dropout { rate } => write!(f, "Dropout({})", rate),
        }
    }
}
