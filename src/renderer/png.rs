//! PNG rasterization of signatures using tiny-skia

use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::{debug, warn};

use super::config::Rgba;
use super::path::SignaturePath;
use super::ExportConfig;

/// Rasterize a signature path to PNG bytes
///
/// The surface is `config.png_size()` pixels: the logical canvas scaled by
/// `png_scale`. Returns `None` for an empty path or when the surface cannot be
/// allocated or encoded.
pub fn render_png(path: &SignaturePath, config: &ExportConfig) -> Option<Vec<u8>> {
    let pixmap = rasterize(path, config)?;

    match pixmap.encode_png() {
        Ok(bytes) => {
            debug!(
                width = pixmap.width(),
                height = pixmap.height(),
                bytes = bytes.len(),
                "encoded signature png"
            );
            Some(bytes)
        }
        Err(err) => {
            warn!("failed to encode signature png: {}", err);
            None
        }
    }
}

/// Draw the background and stroke the path onto a fresh surface
pub fn rasterize(path: &SignaturePath, config: &ExportConfig) -> Option<Pixmap> {
    if path.is_empty() {
        return None;
    }

    let (width, height) = config.png_size();
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        warn!(width, height, "cannot allocate png surface");
        return None;
    };

    pixmap.fill(to_color(config.png_background));

    let mut builder = PathBuilder::new();
    for (i, point) in path.points().enumerate() {
        if i == 0 {
            builder.move_to(point.x as f32, point.y as f32);
        } else {
            builder.line_to(point.x as f32, point.y as f32);
        }
    }

    // A lone move-to has no geometry, matching a canvas stroke of "M x y"
    if let Some(sk_path) = builder.finish() {
        let mut paint = Paint::default();
        paint.set_color(to_color(config.png_stroke));
        paint.anti_alias = true;

        let stroke = Stroke {
            width: config.stroke_width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        let scale = config.png_scale as f32;
        pixmap.stroke_path(
            &sk_path,
            &paint,
            &stroke,
            Transform::from_scale(scale, scale),
            None,
        );
    }

    Some(pixmap)
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}
