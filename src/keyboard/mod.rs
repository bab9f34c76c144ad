//! Keyboard layout catalog
//!
//! Layouts are static tables looked up by name. Only `ansi` ships today;
//! everything downstream takes a `&Layout` and does not care how many exist.

pub mod ansi;
pub mod key;

pub use ansi::ANSI;
pub use key::{Key, Layout};

/// Name of the layout used when none is configured
pub const DEFAULT_LAYOUT: &str = "ansi";

static LAYOUTS: &[&Layout] = &[&ANSI];

/// Look up a layout by name
pub fn layout(name: &str) -> Option<&'static Layout> {
    LAYOUTS.iter().copied().find(|l| l.name() == name)
}

/// The layout named by [`DEFAULT_LAYOUT`]
pub fn default_layout() -> &'static Layout {
    &ANSI
}

/// Names of all available layouts
pub fn layout_names() -> impl Iterator<Item = &'static str> {
    LAYOUTS.iter().map(|l| l.name())
}
