//! Data types for span resolution.

mod merge;
mod sheet;

pub use merge::*;
pub use sheet::*;
