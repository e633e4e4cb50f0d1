//! Error types for the terminal shell.

use lifetrace_core::ConfigError;
use thiserror::Error;

/// Errors that can occur in the terminal application.
///
/// Config errors are fatal before the tick loop starts; IO errors cover
/// terminal setup, rendering and teardown.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid startup configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
