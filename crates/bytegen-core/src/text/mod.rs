// crates/bytegen-core/src/text/mod.rs

pub mod bold;
pub mod clean;
pub mod normalize;
