mod config;
mod tracing;

pub use config::*;
pub use tracing::*;
