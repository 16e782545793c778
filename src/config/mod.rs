//! Configuration module
//!
//! Tab preferences and their persistence to the platform config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
