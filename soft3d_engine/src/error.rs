//! Error types for the Soft3D engine
//!
//! Rendering itself never fails: unprojectable points, degenerate faces and
//! bad indices are dropped silently. Errors only come out of configuration
//! APIs (camera parameters, render texture sizes, textures, JSON state).

use std::fmt;

/// Result type for Soft3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Soft3D engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter is out of its valid range (near >= far, zero-sized texture, ...)
    InvalidParameter(String),

    /// Invalid resource data (texture bytes, colour strings, ...)
    InvalidResource(String),

    /// Camera state could not be encoded or decoded
    SerializationError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an engine error, logging it at ERROR level first
///
/// The plain form builds `Error::InvalidParameter`. Prefix the source with a
/// variant name and `=>` to build another kind.
///
/// # Example
///
/// ```no_run
/// # use soft3d_engine::engine_err;
/// let err = engine_err!("soft3d::Camera3D", "near plane must be positive, got {}", -1.0);
/// let bad = engine_err!(InvalidResource => "soft3d::Texture", "{} bytes missing", 12);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($kind:ident => $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::soft3d::Error::$kind(message)
    }};
    ($source:expr, $($arg:tt)*) => {
        $crate::engine_err!(InvalidParameter => $source, $($arg)*)
    };
}

/// Log an error and return it as `Err(..)` from the enclosing function
///
/// Accepts the same two forms as [`engine_err!`].
///
/// # Example
///
/// ```no_run
/// # use soft3d_engine::engine_bail;
/// fn check(width: u32) -> soft3d_engine::soft3d::Result<()> {
///     if width == 0 {
///         engine_bail!("soft3d::RenderTexture", "width must be non-zero");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($kind:ident => $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($kind => $source, $($arg)*))
    };
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!(InvalidParameter => $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
