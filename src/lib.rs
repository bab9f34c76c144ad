//! Keysig - keyboard signatures
//!
//! Draws a signature by connecting the keys of a keyboard layout in the order
//! the characters of a name are typed, and exports it as SVG or PNG.
//!
//! # Example
//!
//! ```rust
//! use keysig::render;
//!
//! let svg = render("Ada").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("<path"));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod keyboard;
pub mod logging;
pub mod parser;
pub mod renderer;
pub mod resolver;
pub mod signature;

pub use config::RenderConfig;
pub use controller::{Highlight, SignaturePad};
pub use error::ConfigError;
pub use input::InputEvent;
pub use keyboard::{Key, Layout};
pub use parser::{tokenize, Token};
pub use renderer::{ExportConfig, ExportFile, GridConfig, SignaturePath};
pub use resolver::{resolve, Resolution};
pub use signature::Signature;

/// Compute the signature of `input` for a configuration
///
/// # Example
///
/// ```rust
/// use keysig::{signature, RenderConfig};
///
/// let sig = signature("AS", &RenderConfig::default()).unwrap();
/// assert_eq!(sig.path_d(), "M 108 181 L 156 181");
/// ```
pub fn signature(input: &str, config: &RenderConfig) -> Result<Signature, ConfigError> {
    Ok(Signature::compute(input, config.layout()?, &config.grid))
}

/// Render `input` to an SVG document with default configuration
///
/// Returns `None` when no character of the input lands on a key.
pub fn render(input: &str) -> Option<String> {
    let config = RenderConfig::default();
    let sig = Signature::compute(input, keyboard::default_layout(), &config.grid);
    renderer::render_svg(sig.path(), &config.export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_name() {
        let svg = render("Ada").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"stroke="black""#));
    }

    #[test]
    fn test_render_empty() {
        assert!(render("").is_none());
        assert!(render("!?").is_none());
    }

    #[test]
    fn test_signature_with_unknown_layout() {
        let config = RenderConfig::new().with_layout("nope");
        assert!(signature("abc", &config).is_err());
    }
}
