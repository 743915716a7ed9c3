//! Static icon definition types.
//!
//! An icon is described once, at compile time, as an [`IconData`]: a name,
//! a coordinate frame, an ordered list of paths with their paint modes,
//! and the defaults applied when a caller overrides nothing. Definitions
//! are immutable and live for the process lifetime; every rendered
//! instance borrows the same static data.

/// The coordinate frame a definition's path data is interpreted within.
///
/// Path coordinates must stay inside this box; a definition that draws
/// outside it renders clipped or misplaced, it does not fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge of the frame.
    pub min_x: f32,
    /// Top edge of the frame.
    pub min_y: f32,
    /// Frame width.
    pub width: f32,
    /// Frame height.
    pub height: f32,
}

impl ViewBox {
    /// The 24x24 frame the catalog is drawn in.
    pub const SQUARE_24: ViewBox = ViewBox::new(0.0, 0.0, 24.0, 24.0);

    /// Create a view box.
    pub const fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

/// How a single path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintMode {
    /// Outline only: the instance color strokes the path at this width.
    Stroke {
        /// Stroke width in view-box units.
        width: f32,
    },
    /// Silhouette only: the instance color fills the path.
    Fill,
    /// Both operations with the same instance color.
    StrokeAndFill {
        /// Stroke width in view-box units.
        width: f32,
    },
    /// Always stroked; filled only when the instance variant is
    /// [`Filled`](crate::IconVariant::Filled).
    DualState {
        /// Stroke width in view-box units.
        width: f32,
    },
}

impl PaintMode {
    /// Stroke width, for the modes that stroke.
    pub const fn stroke_width(&self) -> Option<f32> {
        match self {
            PaintMode::Stroke { width }
            | PaintMode::StrokeAndFill { width }
            | PaintMode::DualState { width } => Some(*width),
            PaintMode::Fill => None,
        }
    }

    /// Whether this mode reacts to the instance variant.
    pub const fn is_dual_state(&self) -> bool {
        matches!(self, PaintMode::DualState { .. })
    }
}

/// One path of an icon definition: SVG path data plus its paint mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPath {
    /// SVG path data (`M`/`L`/`C`/`A`... commands).
    pub data: &'static str,
    /// How the path is painted.
    pub mode: PaintMode,
}

impl IconPath {
    /// Create a path entry.
    ///
    /// This is a const function, allowing use in static catalog entries.
    pub const fn new(data: &'static str, mode: PaintMode) -> Self {
        Self { data, mode }
    }
}

/// The static definition of one icon.
///
/// Definitions are created as constants in the catalog and registered by
/// name; they are never constructed at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconData {
    /// Unique registry name.
    pub name: &'static str,
    /// Coordinate frame for the path data.
    pub view_box: ViewBox,
    /// Ordered paths, painted first to last.
    pub paths: &'static [IconPath],
    /// Size applied when the instance does not override it.
    pub default_size: f32,
    /// Color applied when the instance does not override it.
    pub default_color: &'static str,
}

impl IconData {
    /// Create an icon definition.
    ///
    /// This is a const function, allowing use in static/const contexts.
    pub const fn new(
        name: &'static str,
        view_box: ViewBox,
        paths: &'static [IconPath],
        default_size: f32,
        default_color: &'static str,
    ) -> Self {
        Self {
            name,
            view_box,
            paths,
            default_size,
            default_color,
        }
    }

    /// Whether any path of this icon reacts to the instance variant.
    pub fn has_dual_state(&self) -> bool {
        self.paths.iter().any(|path| path.mode.is_dual_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PATHS: &[IconPath] = &[
        IconPath::new("M2 2h20v20H2z", PaintMode::Stroke { width: 2.0 }),
        IconPath::new("M8 8h8v8H8z", PaintMode::Fill),
    ];

    const TEST_ICON: IconData =
        IconData::new("test-box", ViewBox::SQUARE_24, TEST_PATHS, 24.0, "#000000");

    #[test]
    fn test_icon_data_const() {
        assert_eq!(TEST_ICON.name, "test-box");
        assert_eq!(TEST_ICON.paths.len(), 2);
        assert_eq!(TEST_ICON.default_size, 24.0);
    }

    #[test]
    fn test_paint_mode_stroke_width() {
        assert_eq!(PaintMode::Stroke { width: 2.0 }.stroke_width(), Some(2.0));
        assert_eq!(PaintMode::DualState { width: 1.5 }.stroke_width(), Some(1.5));
        assert_eq!(PaintMode::Fill.stroke_width(), None);
    }

    #[test]
    fn test_dual_state_detection() {
        assert!(!TEST_ICON.has_dual_state());
        assert!(PaintMode::DualState { width: 2.0 }.is_dual_state());
        assert!(!PaintMode::Fill.is_dual_state());
    }

    #[test]
    fn test_view_box_square() {
        let vb = ViewBox::SQUARE_24;
        assert_eq!(vb.min_x, 0.0);
        assert_eq!(vb.width, 24.0);
        assert_eq!(vb.width, vb.height);
    }
}
