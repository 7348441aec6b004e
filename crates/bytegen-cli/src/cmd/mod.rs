// crates/bytegen-cli/src/cmd/mod.rs

pub mod opts;
pub mod row;
pub mod show_config;
pub mod text;
