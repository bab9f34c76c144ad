//! Path building and export
//!
//! Turns resolved keys into a polyline and serializes it as an SVG document or
//! a supersampled PNG.

pub mod config;
pub mod export;
pub mod path;
pub mod png;
pub mod svg;

pub use config::{ExportConfig, GridConfig, Rgba};
pub use export::{export_file_name, export_png, export_png_async, export_svg, ExportFile};
pub use path::{build_path, key_center, PathSegment, Point, SignaturePath};
pub use png::render_png;
pub use svg::{render_preview_svg, render_svg};
