use thiserror::Error;

pub type Result<T> = std::result::Result<T, BytegenError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BytegenError {
    /// Rejected option or option combination. Raised before any stage runs.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A codepoint has no representation in the requested charset.
    #[error(
        "encoding error: {ch:?} (U+{code:04X}) at byte {offset} is not representable in {charset}",
        code = u32::from(*.ch)
    )]
    Encoding {
        charset: String,
        ch: char,
        offset: usize,
    },
}

impl BytegenError {
    pub fn config(msg: impl Into<String>) -> Self {
        BytegenError::Configuration(msg.into())
    }
}
