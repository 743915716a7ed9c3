//! SVG emission and rasterization for rendered icons.
//!
//! [`to_svg`] turns an [`IconRender`] into standalone SVG markup — the
//! lingua franca of host drawing surfaces — and [`rasterize`] turns that
//! markup into straight-alpha RGBA pixels for surfaces that want bitmaps.
//! Rasterization goes through resvg, so what tests assert on pixels is
//! what a production renderer would actually draw.

use std::fmt::Write as _;

use resvg::tiny_skia;
use resvg::usvg;

use crate::error::{IconError, IconResult};
use crate::render::IconRender;

/// Emit standalone SVG markup for a rendered icon.
///
/// Stroked paths are emitted with round caps and joins; the whole catalog
/// is drawn in that style, so it is fixed here rather than configured per
/// path. Fill-less paths get an explicit `fill="none"` so viewers do not
/// apply the SVG default black fill.
pub fn to_svg(render: &IconRender) -> String {
    let vb = render.view_box;
    let mut svg = String::with_capacity(256);

    // write! to a String cannot fail.
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"{} {} {} {}\">",
        render.size, render.size, vb.min_x, vb.min_y, vb.width, vb.height,
    );

    for path in &render.paths {
        let _ = write!(svg, "<path d=\"{}\"", escape_attr(path.data));
        match &path.fill {
            Some(color) => {
                let _ = write!(svg, " fill=\"{}\"", escape_attr(color));
            }
            None => svg.push_str(" fill=\"none\""),
        }
        if let Some(stroke) = &path.stroke {
            let _ = write!(
                svg,
                " stroke=\"{}\" stroke-width=\"{}\" \
                 stroke-linecap=\"round\" stroke-linejoin=\"round\"",
                escape_attr(&stroke.color),
                stroke.width,
            );
        }
        svg.push_str("/>");
    }

    svg.push_str("</svg>");
    svg
}

/// Rasterize a rendered icon to straight-alpha RGBA pixels.
///
/// The output covers `render.size * scale` pixels on each side (minimum
/// 1x1) with length `width * height * 4`. Scale factors above 1.0 give
/// crisp HiDPI bitmaps from the same vector data.
pub fn rasterize(render: &IconRender, scale: f32) -> IconResult<Vec<u8>> {
    let markup = to_svg(render);
    let tree = usvg::Tree::from_data(markup.as_bytes(), &usvg::Options::default())
        .map_err(|e| IconError::Markup(e.to_string()))?;

    let side = ((render.size * scale).round() as u32).max(1);
    let mut pixmap = tiny_skia::Pixmap::new(side, side).ok_or(IconError::RasterSurface {
        width: side,
        height: side,
    })?;

    let tree_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        side as f32 / tree_size.width(),
        side as f32 / tree_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // Convert from premultiplied RGBA to straight RGBA.
    let data = pixmap.data();
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            result.push((chunk[0] as f32 / a).min(255.0) as u8);
            result.push((chunk[1] as f32 / a).min(255.0) as u8);
            result.push((chunk[2] as f32 / a).min(255.0) as u8);
            result.push(chunk[3]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }
    Ok(result)
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
