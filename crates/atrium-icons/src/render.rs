//! The generic icon renderer.
//!
//! One renderer serves every icon in the catalog: it takes a static
//! definition plus per-instance overrides and resolves them into an
//! [`IconRender`], a plain description of what to draw. The renderer is
//! pure and re-entrant; identical inputs always produce an identical
//! description, and nothing is retained between calls.

use crate::error::IconResult;
use crate::registry::registry;
use crate::types::{IconData, PaintMode, ViewBox};

/// Visual state for icons that model two renderings of the same path.
///
/// Only paths declared [`PaintMode::DualState`] react to this; every
/// other path paints the same way in both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    /// Outline rendering (default).
    #[default]
    Outline,
    /// Solid rendering: dual-state paths gain a fill.
    Filled,
}

/// Per-instance overrides applied on top of a definition's defaults.
///
/// # Example
///
/// ```
/// use atrium_icons::IconStyle;
///
/// let style = IconStyle::new()
///     .with_size(32.0)
///     .with_color("#FFFFFF")
///     .filled();
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconStyle {
    size: Option<f32>,
    color: Option<String>,
    layout: Option<String>,
    variant: IconVariant,
}

impl IconStyle {
    /// Create an empty override set; the definition's defaults apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rendered size (uniform width and height).
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Override the paint color. The string is passed through to the
    /// drawing surface untouched; any color syntax it accepts works.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach an opaque layout directive. It is carried on the rendering
    /// description verbatim and never interpreted here.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Select a variant explicitly.
    pub fn with_variant(mut self, variant: IconVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Select the solid variant of a dual-state icon.
    pub fn filled(self) -> Self {
        self.with_variant(IconVariant::Filled)
    }

    /// The selected variant.
    pub fn variant(&self) -> IconVariant {
        self.variant
    }
}

/// Stroke paint resolved for one path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePaint {
    /// Stroke color.
    pub color: String,
    /// Stroke width in view-box units.
    pub width: f32,
}

/// One path of a rendered icon with its paint fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPath {
    /// SVG path data, borrowed from the definition.
    pub data: &'static str,
    /// Fill color; `None` paints no interior.
    pub fill: Option<String>,
    /// Stroke paint; `None` paints no outline.
    pub stroke: Option<StrokePaint>,
}

/// A fully resolved rendering of one icon instance.
///
/// This is pure data: handing it to a drawing surface (or to
/// [`to_svg`](crate::to_svg)) is the caller's side of the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRender {
    /// Name of the definition this instance was rendered from.
    pub name: &'static str,
    /// Uniform width and height.
    pub size: f32,
    /// Coordinate frame of the path data.
    pub view_box: ViewBox,
    /// Opaque layout directive, passed through from the overrides.
    pub layout: Option<String>,
    /// Paths in paint order.
    pub paths: Vec<RenderedPath>,
}

impl IconData {
    /// Resolve this definition against per-instance overrides.
    ///
    /// Size and color fall back to the definition's defaults; the variant
    /// only affects paths declared dual-state.
    pub fn render(&self, style: &IconStyle) -> IconRender {
        let size = style.size.unwrap_or(self.default_size);
        let color = style.color.as_deref().unwrap_or(self.default_color);

        let paths = self
            .paths
            .iter()
            .map(|path| {
                let fill = match path.mode {
                    PaintMode::Fill | PaintMode::StrokeAndFill { .. } => Some(color.to_string()),
                    PaintMode::DualState { .. } if style.variant == IconVariant::Filled => {
                        Some(color.to_string())
                    }
                    PaintMode::Stroke { .. } | PaintMode::DualState { .. } => None,
                };
                let stroke = path.mode.stroke_width().map(|width| StrokePaint {
                    color: color.to_string(),
                    width,
                });
                RenderedPath {
                    data: path.data,
                    fill,
                    stroke,
                }
            })
            .collect();

        IconRender {
            name: self.name,
            size,
            view_box: self.view_box,
            layout: style.layout.clone(),
            paths,
        }
    }
}

/// Render a registered icon by name.
///
/// # Errors
///
/// Fails with [`IconError::UnknownIcon`](crate::IconError::UnknownIcon)
/// if the name is not registered; rendering itself cannot fail.
pub fn render(name: &str, style: &IconStyle) -> IconResult<IconRender> {
    Ok(registry().lookup(name)?.render(style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names;

    #[test]
    fn test_render_applies_definition_defaults() {
        for name in registry().names() {
            let icon = registry().get(name).unwrap();
            let rendered = render(name, &IconStyle::new()).unwrap();
            assert_eq!(rendered.size, icon.default_size, "{name}");
            assert_eq!(rendered.view_box, icon.view_box, "{name}");
            assert!(rendered.layout.is_none(), "{name}");
            for path in &rendered.paths {
                if let Some(stroke) = &path.stroke {
                    assert_eq!(stroke.color, icon.default_color, "{name}");
                }
            }
        }
    }

    #[test]
    fn test_size_override_leaves_geometry_untouched() {
        let default = render(names::HOME, &IconStyle::new()).unwrap();
        let scaled = render(names::HOME, &IconStyle::new().with_size(40.0)).unwrap();

        assert_eq!(scaled.size, 40.0);
        assert_eq!(scaled.view_box, default.view_box);
        assert_eq!(scaled.paths, default.paths);
    }

    #[test]
    fn test_color_override_applies_to_all_paths() {
        let rendered = render(names::CARD, &IconStyle::new().with_color("#FFFFFF")).unwrap();
        assert_eq!(rendered.paths[0].fill.as_deref(), Some("#FFFFFF"));
        assert_eq!(
            rendered.paths[1].stroke.as_ref().map(|s| s.color.as_str()),
            Some("#FFFFFF")
        );
    }

    #[test]
    fn test_layout_passes_through_opaque() {
        let style = IconStyle::new().with_layout("margin-right: 8");
        let rendered = render(names::CHECK, &style).unwrap();
        assert_eq!(rendered.layout.as_deref(), Some("margin-right: 8"));
    }

    #[test]
    fn test_saved_toggles_fill_with_variant() {
        let outline = render(names::SAVED, &IconStyle::new()).unwrap();
        let filled = render(names::SAVED, &IconStyle::new().filled()).unwrap();

        assert!(outline.paths[0].fill.is_none());
        assert_eq!(
            filled.paths[0].fill.as_deref(),
            Some(registry().get(names::SAVED).unwrap().default_color)
        );
        // The stroke stays on in both variants.
        assert_eq!(outline.paths[0].stroke, filled.paths[0].stroke);
    }

    #[test]
    fn test_saved_is_the_only_variant_sensitive_rendering() {
        for name in registry().names() {
            let outline = render(name, &IconStyle::new()).unwrap();
            let filled = render(name, &IconStyle::new().filled()).unwrap();
            if name == names::SAVED {
                assert_ne!(outline.paths, filled.paths, "{name}");
            } else {
                assert_eq!(outline.paths, filled.paths, "{name}");
            }
        }
    }

    #[test]
    fn test_variant_toggle_leaves_other_overrides_alone() {
        let style = IconStyle::new().with_size(32.0).with_color("#FF0000");
        let outline = render(names::SAVED, &style.clone()).unwrap();
        let filled = render(names::SAVED, &style.filled()).unwrap();

        assert_eq!(outline.size, filled.size);
        assert_eq!(outline.layout, filled.layout);
        assert_eq!(outline.paths[0].stroke, filled.paths[0].stroke);
        assert_eq!(filled.paths[0].fill.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let style = IconStyle::new().with_size(18.0).with_color("#333333");
        assert_eq!(
            render(names::BELL, &style).unwrap(),
            render(names::BELL, &style).unwrap()
        );
    }

    #[test]
    fn test_render_unknown_name_fails() {
        assert!(render("nope", &IconStyle::new()).is_err());
    }
}
