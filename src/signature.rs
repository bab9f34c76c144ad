//! A fully computed signature for one input string

use std::collections::BTreeSet;

use tracing::debug;

use crate::keyboard::{Key, Layout};
use crate::parser::tokenize;
use crate::renderer::path::{build_path, Point, SignaturePath};
use crate::renderer::GridConfig;
use crate::resolver::{resolve, Resolution, ResolvedKey};

/// Tokens, matched keys and path for an input string on a layout
///
/// Always computed from scratch; nothing carries over between inputs.
#[derive(Debug, Clone)]
pub struct Signature {
    input: String,
    layout: &'static Layout,
    resolution: Resolution,
    path: SignaturePath,
}

impl Signature {
    /// Run tokenize -> resolve -> build path
    pub fn compute(input: &str, layout: &'static Layout, grid: &GridConfig) -> Self {
        let tokens = tokenize(input);
        let resolution = resolve(&tokens, layout);
        let path = build_path(&resolution.matches, grid);

        debug!(
            layout = layout.name(),
            tokens = tokens.len(),
            points = path.len(),
            "computed signature"
        );

        Self {
            input: input.to_string(),
            layout,
            resolution,
            path,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Matched keys in token order
    pub fn matches(&self) -> &[ResolvedKey] {
        &self.resolution.matches
    }

    pub fn path(&self) -> &SignaturePath {
        &self.path
    }

    pub fn points(&self) -> Vec<Point> {
        self.path.points().collect()
    }

    /// SVG path `d` string; empty when nothing resolved
    pub fn path_d(&self) -> String {
        self.path.to_svg_d()
    }

    /// Identifiers of keys to highlight
    pub fn active_keys(&self) -> &BTreeSet<&'static str> {
        &self.resolution.active
    }

    /// Key matched by the last typed token
    pub fn current_key(&self) -> Option<&'static Key> {
        self.resolution.current_key()
    }

    /// True when no point resolved
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether this signature was computed for the given input and layout
    pub fn is_for(&self, input: &str, layout: &Layout) -> bool {
        self.input == input && self.layout.name() == layout.name()
    }
}
