use image::GenericImageView;
use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{Result, ZooError};

/// Dimensions of one input image. Every field is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSpec {
    pub width: usize,
    pub height: usize,
    /// Channel count (1 = grayscale, 3 = RGB, ...).
    pub depth: usize,
}

impl ImageSpec {
    pub fn new(width: usize, height: usize, depth: usize) -> Result<ImageSpec> {
        Ok(ImageSpec {
            width: positive("width", width)?,
            height: positive("height", height)?,
            depth: positive("depth", depth)?,
        })
    }

    /// Reads width, height and channel count from an image file header/pixels.
    pub fn from_image_file<P: AsRef<Path>>(path: P) -> Result<ImageSpec> {
        let img = image::open(path.as_ref())?;
        let (width, height) = img.dimensions();
        let depth = img.color().channel_count() as usize;
        log::debug!(
            "read {}: {}x{} with {} channel(s)",
            path.as_ref().display(),
            width,
            height,
            depth
        );
        ImageSpec::new(width as usize, height as usize, depth)
    }
}

/// Number of output categories; determines the classifier head width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassCount(usize);

impl ClassCount {
    pub fn new(classes: usize) -> Result<ClassCount> {
        positive("classes", classes).map(ClassCount)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// Parses a user-supplied dimension, rejecting zero, negatives and garbage
/// with the same error the builders raise.
pub fn parse_dimension(name: &'static str, raw: &str) -> Result<usize> {
    let invalid = || ZooError::InvalidDimension { name, value: raw.trim().to_owned() };
    let value: i64 = raw.trim().parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }
    usize::try_from(value).map_err(|_| invalid())
}

fn positive(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(ZooError::InvalidDimension { name, value: value.to_string() })
    } else {
        Ok(value)
    }
}
