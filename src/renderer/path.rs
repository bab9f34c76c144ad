//! Signature path construction
//!
//! Converts resolved keys into pixel-space points and an SVG path `d` string.

use std::fmt::Write;

use crate::keyboard::Key;
use crate::resolver::ResolvedKey;

use super::GridConfig;

/// A 2D point in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A segment of the signature polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
}

impl PathSegment {
    pub fn point(&self) -> Point {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
        }
    }
}

/// An open polyline through key centers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignaturePath {
    segments: Vec<PathSegment>,
}

impl SignaturePath {
    /// Build a path visiting points in order
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let segments = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathSegment::MoveTo(p)
                } else {
                    PathSegment::LineTo(p)
                }
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().map(PathSegment::point)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Convert to SVG path `d` attribute string
    ///
    /// Empty for an empty path, `M x y L x y ...` otherwise.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            let (cmd, p) = match seg {
                PathSegment::MoveTo(p) => ('M', p),
                PathSegment::LineTo(p) => ('L', p),
            };
            // Writing to a String cannot fail
            let _ = write!(d, "{} {} {}", cmd, p.x, p.y);
        }
        d
    }
}

/// Pixel center of a key
pub fn key_center(key: &Key, grid: &GridConfig) -> Point {
    Point {
        x: key.column * grid.cell_width + grid.left_margin + key.width * grid.key_size / 2.0,
        y: f64::from(key.row) * grid.cell_height
            + grid.top_margin
            + key.height * grid.key_size / 2.0,
    }
}

/// Build the signature path for resolved keys
pub fn build_path(matches: &[ResolvedKey], grid: &GridConfig) -> SignaturePath {
    SignaturePath::from_points(matches.iter().map(|m| key_center(m.key, grid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{Layout, ANSI};
    use crate::parser::tokenize;
    use crate::resolver::resolve;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_center() {
        let grid = GridConfig::default();
        let a = ANSI.key("KeyA").unwrap();
        assert_eq!(key_center(a, &grid), Point::new(108.0, 181.0));
    }

    #[test]
    fn test_wide_and_tall_key_centers() {
        let grid = GridConfig::default();
        let space = ANSI.key("Space").unwrap();
        // 3.75 * 48 + 2 + 6.25 * 22
        assert_eq!(key_center(space, &grid), Point::new(319.5, 277.0));
        let plus = ANSI.key("NumpadAdd").unwrap();
        assert_eq!(key_center(plus, &grid), Point::new(1056.0, 155.0));
    }

    #[test]
    fn test_empty_path() {
        let path = SignaturePath::from_points([]);
        assert!(path.is_empty());
        assert_eq!(path.to_svg_d(), "");
    }

    #[test]
    fn test_single_point_is_move_only() {
        let path = SignaturePath::from_points([Point::new(1.0, 2.0)]);
        assert_eq!(path.to_svg_d(), "M 1 2");
    }

    #[test]
    fn test_to_svg_d() {
        let path = SignaturePath::from_points([
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.5, 100.0),
        ]);
        assert_eq!(path.to_svg_d(), "M 0 0 L 100 0 L 100.5 100");
    }

    #[test]
    fn test_build_path_from_resolution() {
        let res = resolve(&tokenize("AS"), &ANSI);
        let path = build_path(&res.matches, &GridConfig::default());
        assert_eq!(
            path.segments(),
            &[
                PathSegment::MoveTo(Point::new(108.0, 181.0)),
                PathSegment::LineTo(Point::new(156.0, 181.0)),
            ]
        );
        assert_eq!(path.to_svg_d(), "M 108 181 L 156 181");
    }

    #[test]
    fn test_custom_grid() {
        static ONE: Layout = Layout::new("one", &[crate::keyboard::Key::new("KeyQ", "Q", 0.5, 0)]);
        let grid = GridConfig::new()
            .with_cell_size(60.0, 60.0)
            .with_key_size(0.0)
            .with_margins(28.0, 40.0);
        let res = resolve(&tokenize("q"), &ONE);
        assert_eq!(build_path(&res.matches, &grid).to_svg_d(), "M 58 40");
    }
}
