pub mod convention;

pub use convention::{LayoutConvention, ResolvedLayout};
