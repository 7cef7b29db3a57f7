//! Crate-level error types.

use std::fmt;

use crate::navigation::NavigationBehavior;

/// Errors produced by the orbitnav crate.
///
/// Precondition violations are reported through this type in every build
/// profile; the library never panics on them.
#[derive(Debug)]
pub enum NavError {
    /// The rig is not attached to a viewport host.
    NotAttached,
    /// The rig is already attached to a viewport host.
    AlreadyAttached,
    /// Viewport dimensions or field of view are unusable.
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Bounds are empty, inverted or non-finite.
    InvalidBounds,
    /// No controller exists for this behavior's input kind and response.
    UnsupportedBehavior(NavigationBehavior),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAttached => write!(f, "camera rig is not attached"),
            Self::AlreadyAttached => {
                write!(f, "camera rig is already attached")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}")
            }
            Self::InvalidBounds => write!(f, "invalid bounds"),
            Self::UnsupportedBehavior(nb) => {
                write!(f, "unsupported navigation behavior: {nb}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
