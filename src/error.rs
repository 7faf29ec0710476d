//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "viewer")]
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the easel crate.
#[derive(Debug)]
pub enum EaselError {
    /// GPU context initialization failure.
    #[cfg(feature = "viewer")]
    Gpu(RenderContextError),
    /// Generic I/O failure while reading or writing a file.
    Io(std::io::Error),
    /// The camera file exists but could not be decoded or encoded.
    CameraFile {
        /// Location of the offending camera file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A module failed to initialize.
    Module(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for EaselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CameraFile { path, reason } => {
                write!(f, "camera file {}: {reason}", path.display())
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Module(msg) => write!(f, "module error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for EaselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<RenderContextError> for EaselError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for EaselError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
