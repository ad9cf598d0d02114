//! Error types for Umbra.

use std::io;

/// Errors produced by the Umbra rendering crates.
#[derive(Debug, thiserror::Error)]
pub enum UmbraError {
    /// A drawing-surface operation failed.
    #[error("surface error: {0}")]
    Surface(String),

    /// A shadow style carried an unusable parameter.
    #[error("style error: {0}")]
    Style(String),

    /// `draw` ran before any successful bounds change built the shadow pixmap.
    #[error("shadow pixmap not initialized: set_bounds must run before draw")]
    NotInitialized,

    /// An off-screen pixel buffer could not be created.
    #[error("allocation of {width}x{height} pixmap rejected: {reason}")]
    Allocation {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, UmbraError>;
