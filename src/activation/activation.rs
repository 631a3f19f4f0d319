use serde::{Serialize, Deserialize};
use std::fmt;

/// Element-wise (or, for `Softmax`, vector-wise) nonlinearity attached to an
/// `Activation` layer. The graph only records which one is used; evaluating
/// it is the job of whatever framework executes the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFunction {
    ReLU,
    /// Normalizes the last axis into a probability distribution; used as the
    /// classifier head of every architecture in this crate.
    Softmax,
}

impl ActivationFunction {
    /// Framework-style lowercase name, `"relu"` or `"softmax"`.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Softmax => "softmax",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
