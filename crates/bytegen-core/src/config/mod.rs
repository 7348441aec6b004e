// crates/bytegen-core/src/config/mod.rs

pub mod defaults;
pub mod format;
pub mod options;
pub mod settings;
