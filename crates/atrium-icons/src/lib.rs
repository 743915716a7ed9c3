//! Vector icons for the Atrium marketplace app.
//!
//! Every icon is a static, immutable definition — a name, a coordinate
//! frame, path data, per-path paint modes, and defaults — held in a
//! process-wide registry. One generic renderer resolves a definition plus
//! per-instance overrides into a pure rendering description that any
//! vector-drawing surface can consume, either directly or via the SVG and
//! raster bridges in this crate.
//!
//! # Rendering an icon
//!
//! ```
//! use atrium_icons::{names, render, to_svg, IconStyle};
//!
//! // Defaults come from the definition.
//! let icon = render(names::HOME, &IconStyle::new())?;
//! assert_eq!(icon.size, 24.0);
//!
//! // Overrides apply per instance; the save icon supports a solid state.
//! let saved = render(
//!     names::SAVED,
//!     &IconStyle::new().with_size(32.0).with_color("#FFFFFF").filled(),
//! )?;
//! let markup = to_svg(&saved);
//! assert!(markup.contains("viewBox=\"0 0 24 24\""));
//! # Ok::<(), atrium_icons::IconError>(())
//! ```
//!
//! # Concurrency
//!
//! The registry is populated on first access and read-only afterwards;
//! rendering is pure. Concurrent render passes need no coordination.

mod catalog;
mod error;
mod registry;
mod render;
mod svg;
mod types;

pub use catalog::names;
pub use error::{IconError, IconResult};
pub use registry::{registry, IconRegistry};
pub use render::{render, IconRender, IconStyle, IconVariant, RenderedPath, StrokePaint};
pub use svg::{rasterize, to_svg};
pub use types::{IconData, IconPath, PaintMode, ViewBox};
