pub mod error;
pub mod validate;

pub mod config;
pub mod finalize;
pub mod pipeline;
pub mod preset;
pub mod text;
pub mod verify;

pub use crate::config::options::PipelineConfig;
pub use crate::config::settings::Settings;
pub use crate::error::{BytegenError, Result};
pub use crate::pipeline::{transform, transform_row, FinalizedBytes, Transformed};
