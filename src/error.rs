//! Unified error type for heartgen.

use thiserror::Error;

/// Errors that can occur while generating or packaging the icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raster library failed to encode or save a frame.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The icon compiler could not be launched at all.
    #[error("Failed to launch '{tool}': {source}")]
    BundlerLaunch {
        /// The executable that was invoked.
        tool: String,
        /// The underlying spawn error.
        source: std::io::Error,
    },

    /// The icon compiler ran but reported failure.
    #[error("'{tool}' exited with {status}: {stderr}")]
    BundlerFailed {
        /// The executable that was invoked.
        tool: String,
        /// The process exit status.
        status: std::process::ExitStatus,
        /// Captured stderr from the tool.
        stderr: String,
    },
}
