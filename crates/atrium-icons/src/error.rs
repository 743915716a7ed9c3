//! Error types for the icon crate.

use thiserror::Error;

/// Errors that can occur during icon lookup and rasterization.
#[derive(Error, Debug)]
pub enum IconError {
    /// The requested name is not in the registry.
    ///
    /// Asking for an icon that does not exist is an integration error in
    /// the calling screen, so lookup fails fast instead of rendering
    /// nothing.
    #[error("no icon named {name:?} in the registry")]
    UnknownIcon { name: String },

    /// The generated SVG markup failed to parse.
    #[error("failed to parse generated icon markup: {0}")]
    Markup(String),

    /// A raster surface of the requested size could not be allocated.
    #[error("failed to allocate {width}x{height} raster surface")]
    RasterSurface { width: u32, height: u32 },
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;
