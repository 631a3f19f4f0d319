use serde::{Serialize, Deserialize};
use std::fmt;

/// Shape of a single sample flowing through the graph. The batch axis is
/// implicit and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TensorShape(pub Vec<usize>);

impl TensorShape {
    pub fn new(dims: Vec<usize>) -> TensorShape {
        TensorShape(dims)
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Number of scalar elements per sample; `None` if it overflows `usize`.
    pub fn elements(&self) -> Option<usize> {
        self.0.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Maps a framework axis (batch counted as axis 0, negatives from the end)
    /// onto an index into `dims()`. Returns `None` for the batch axis or an
    /// axis outside the tensor.
    pub fn feature_axis(&self, axis: isize) -> Option<usize> {
        // +1 for the implicit batch axis.
        let full_rank = self.rank() as isize + 1;
        let resolved = if axis < 0 { full_rank + axis } else { axis };
        if resolved <= 0 || resolved >= full_rank {
            None
        } else {
            Some(resolved as usize - 1)
        }
    }
}

impl fmt::Display for TensorShape {
    /// Renders like a framework summary: `(None, 28, 28, 20)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(None")?;
        for d in &self.0 {
            write!(f, ", {}", d)?;
        }
        write!(f, ")")
    }
}
