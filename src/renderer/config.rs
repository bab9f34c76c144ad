//! Configuration for path geometry and export output

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Pixel geometry of the keyboard grid
///
/// A key's pixel center is
/// `column * cell_width + left_margin + width * key_size / 2` horizontally and
/// `row * cell_height + top_margin + height * key_size / 2` vertically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Horizontal distance between key origins
    pub cell_width: f64,
    /// Vertical distance between row origins
    pub cell_height: f64,
    /// Rendered size of a 1x1 key
    pub key_size: f64,
    pub left_margin: f64,
    pub top_margin: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 48.0,
            cell_height: 48.0,
            key_size: 44.0,
            left_margin: 2.0,
            top_margin: 15.0,
        }
    }
}

impl GridConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell size
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the rendered key size
    pub fn with_key_size(mut self, size: f64) -> Self {
        self.key_size = size;
        self
    }

    /// Set the margins
    pub fn with_margins(mut self, left: f64, top: f64) -> Self {
        self.left_margin = left;
        self.top_margin = top;
        self
    }
}

/// Configuration options for SVG and PNG export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Logical canvas width
    pub width: f64,
    /// Logical canvas height
    pub height: f64,
    pub stroke_width: f64,
    /// Stroke color of the SVG document (background is transparent)
    pub svg_stroke: Rgba,
    pub png_background: Rgba,
    pub png_stroke: Rgba,
    /// Supersampling factor for PNG output
    pub png_scale: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 650.0,
            height: 200.0,
            stroke_width: 3.0,
            svg_stroke: Rgba::BLACK,
            png_background: Rgba::BLACK,
            png_stroke: Rgba::WHITE,
            png_scale: 2.0,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical canvas size
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the PNG supersampling factor
    pub fn with_png_scale(mut self, scale: f64) -> Self {
        self.png_scale = scale;
        self
    }

    /// Pixel dimensions of the PNG surface
    pub fn png_size(&self) -> (u32, u32) {
        let px = |v: f64| (v * self.png_scale).round().max(0.0) as u32;
        (px(self.width), px(self.height))
    }
}

/// An 8-bit RGBA color, written as `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl fmt::Display for Rgba {
    /// Basic names where one exists, hex otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rgba::BLACK => f.write_str("black"),
            Rgba::WHITE => f.write_str("white"),
            Rgba::TRANSPARENT => f.write_str("transparent"),
            Rgba { r, g, b, a: 255 } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Rgba { r, g, b, a } => write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
        }
    }
}

impl FromStr for Rgba {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Rgba::BLACK),
            "white" => return Ok(Rgba::WHITE),
            "transparent" => return Ok(Rgba::TRANSPARENT),
            _ => {}
        }

        let hex = s
            .strip_prefix('#')
            .filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("invalid color '{}'", s))?;
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(format!("invalid color '{}'", s)),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Rgba { r, g, b, a }),
            _ => Err(format!("invalid color '{}'", s)),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let grid = GridConfig::default();
        assert_eq!((grid.cell_width, grid.cell_height), (48.0, 48.0));
        assert_eq!(grid.key_size, 44.0);
        assert_eq!((grid.left_margin, grid.top_margin), (2.0, 15.0));
    }

    #[test]
    fn test_grid_builder() {
        let grid = GridConfig::new()
            .with_cell_size(60.0, 60.0)
            .with_key_size(56.0)
            .with_margins(0.0, 0.0);
        assert_eq!(grid.cell_width, 60.0);
        assert_eq!(grid.key_size, 56.0);
        assert_eq!(grid.top_margin, 0.0);
    }

    #[test]
    fn test_default_export() {
        let config = ExportConfig::default();
        assert_eq!((config.width, config.height), (650.0, 200.0));
        assert_eq!(config.stroke_width, 3.0);
        assert_eq!(config.png_size(), (1300, 400));
        assert_eq!(config.svg_stroke, Rgba::BLACK);
        assert_eq!(config.png_stroke, Rgba::WHITE);
    }

    #[test]
    fn test_export_builder() {
        let config = ExportConfig::new()
            .with_canvas(100.0, 50.0)
            .with_png_scale(3.0)
            .with_stroke_width(1.5);
        assert_eq!(config.png_size(), (300, 150));
        assert_eq!(config.stroke_width, 1.5);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!("Black".parse::<Rgba>(), Ok(Rgba::BLACK));
        assert_eq!("#fff".parse::<Rgba>(), Ok(Rgba::WHITE));
        assert_eq!("#ff8000".parse::<Rgba>(), Ok(Rgba::opaque(255, 128, 0)));
        assert_eq!(
            "#00000080".parse::<Rgba>(),
            Ok(Rgba {
                r: 0,
                g: 0,
                b: 0,
                a: 128
            })
        );
        assert!("#ggg".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("red".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_display_colors() {
        assert_eq!(Rgba::BLACK.to_string(), "black");
        assert_eq!(Rgba::opaque(255, 128, 0).to_string(), "#ff8000");
    }
}
