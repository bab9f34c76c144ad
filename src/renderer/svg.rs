//! SVG generation for signatures

use crate::keyboard::Key;
use crate::signature::Signature;

use super::path::{key_center, SignaturePath};
use super::{ExportConfig, GridConfig};

/// Build SVG elements incrementally
pub struct SvgBuilder {
    width: f64,
    height: f64,
    styles: Vec<String>,
    elements: Vec<String>,
    paths: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder for a fixed canvas
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            styles: vec![],
            elements: vec![],
            paths: vec![],
        }
    }

    /// Add a CSS rule
    pub fn add_style(&mut self, css: impl Into<String>) {
        self.styles.push(css.into());
    }

    /// Add a rectangle element
    #[allow(clippy::too_many_arguments)]
    pub fn add_rect(
        &mut self,
        id: Option<&str>,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        rx: f64,
        classes: &[&str],
    ) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let rx_attr = if rx > 0.0 {
            format!(r#" rx="{}""#, rx)
        } else {
            String::new()
        };

        self.elements.push(format!(
            r#"  <rect{}{} x="{}" y="{}" width="{}" height="{}"{}/>"#,
            id_attr,
            class_attr(classes),
            x,
            y,
            w,
            h,
            rx_attr
        ));
    }

    /// Add a centered text element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, classes: &[&str]) {
        self.elements.push(format!(
            r#"  <text{} x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            class_attr(classes),
            x,
            y,
            escape_xml(text)
        ));
    }

    /// Add a stroked, unfilled path (rendered above other elements)
    pub fn add_stroke_path(
        &mut self,
        d: &str,
        stroke: &str,
        stroke_width: f64,
        classes: &[&str],
    ) {
        self.paths.push(format!(
            r#"  <path{} d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
            class_attr(classes),
            d,
            stroke,
            stroke_width
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height
        );
        svg.push('\n');

        if !self.styles.is_empty() {
            svg.push_str("  <style>\n");
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push('\n');
            }
            svg.push_str("  </style>\n");
        }

        for elem in self.elements.iter().chain(&self.paths) {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a signature path as a standalone SVG document
///
/// Returns `None` for an empty path.
pub fn render_svg(path: &SignaturePath, config: &ExportConfig) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    let mut builder = SvgBuilder::new(config.width, config.height);
    builder.add_stroke_path(
        &path.to_svg_d(),
        &config.svg_stroke.to_string(),
        config.stroke_width,
        &[],
    );
    Some(builder.build())
}

/// Render the whole keyboard with active keys highlighted and the signature on top
///
/// The canvas is sized to fit the layout, so this never clips.
pub fn render_preview_svg(
    signature: &Signature,
    grid: &GridConfig,
    config: &ExportConfig,
) -> String {
    let (cols, rows) = signature.layout().extent();
    let width = cols * grid.cell_width + 2.0 * grid.left_margin;
    let height = rows * grid.cell_height + 2.0 * grid.top_margin;

    let mut builder = SvgBuilder::new(width, height);
    builder.add_style(".background { fill: #000000; }");
    builder.add_style(".key { fill: none; stroke: #262626; }");
    builder.add_style(".key-active { fill: #171717; stroke: #404040; }");
    builder.add_style(".key-current { fill: #ffffff80; stroke: #a3a3a3; }");
    builder.add_style(".key-label { font: 12px monospace; fill: #d4d4d4; }");

    builder.add_rect(None, 0.0, 0.0, width, height, 0.0, &["background"]);

    let current = signature.current_key().map(|k| k.id);
    for key in signature.layout().keys() {
        render_key(key, signature, current, grid, &mut builder);
    }

    if !signature.is_empty() {
        builder.add_stroke_path(
            &signature.path_d(),
            "white",
            config.stroke_width,
            &["signature"],
        );
    }

    builder.build()
}

fn render_key(
    key: &Key,
    signature: &Signature,
    current: Option<&str>,
    grid: &GridConfig,
    builder: &mut SvgBuilder,
) {
    let mut classes = vec!["key"];
    if signature.active_keys().contains(key.id) {
        classes.push("key-active");
    }
    if current == Some(key.id) {
        classes.push("key-current");
    }

    builder.add_rect(
        Some(key.id),
        key.column * grid.cell_width + grid.left_margin,
        f64::from(key.row) * grid.cell_height + grid.top_margin,
        key.width * grid.key_size,
        key.height * grid.key_size,
        grid.key_size / 6.0,
        &classes,
    );

    if !key.label.is_empty() {
        let center = key_center(key, grid);
        builder.add_text(key.label, center.x, center.y, &["key-label"]);
    }
}

fn class_attr(classes: &[&str]) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, classes.join(" "))
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
