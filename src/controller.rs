//! Signature pad state: typed text, derived signature and keyboard flash

use std::collections::BTreeSet;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::config::RenderConfig;
use crate::error::ConfigError;
use crate::input::{self, InputEvent};
use crate::keyboard::Layout;
use crate::renderer::{self, ExportConfig, ExportFile, GridConfig};
use crate::signature::Signature;

/// How long the keyboard stays lit after the text changes
pub const FLASH_DURATION: Duration = Duration::from_millis(100);

/// Visibility of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Nothing typed: keyboard shown at rest
    Idle,
    /// Text just changed: keyboard lit until the deadline
    Flash { until: Instant },
    /// Flash expired: keyboard faded out behind the signature
    Hidden,
}

/// Owns the typed text and everything derived from it
///
/// The signature is recomputed whenever the text differs from the one it was
/// computed for; timers are driven by the caller through `tick`.
#[derive(Debug)]
pub struct SignaturePad {
    input: String,
    layout: &'static Layout,
    grid: GridConfig,
    export: ExportConfig,
    signature: Signature,
    highlight: Highlight,
}

impl SignaturePad {
    pub fn new(layout: &'static Layout, grid: GridConfig, export: ExportConfig) -> Self {
        let signature = Signature::compute("", layout, &grid);
        Self {
            input: String::new(),
            layout,
            grid,
            export,
            signature,
            highlight: Highlight::Idle,
        }
    }

    /// Create a pad for a render configuration
    pub fn from_config(config: &RenderConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.layout()?,
            config.grid.clone(),
            config.export.clone(),
        ))
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the typed text
    pub fn set_input(&mut self, input: &str, now: Instant) -> bool {
        self.apply(&InputEvent::Replace(input.to_string()), now)
    }

    /// Apply an editing event, returning whether the text changed
    pub fn apply(&mut self, event: &InputEvent, now: Instant) -> bool {
        if !input::apply(&mut self.input, event) {
            return false;
        }
        self.refresh();
        self.highlight = if self.input.is_empty() {
            Highlight::Idle
        } else {
            Highlight::Flash {
                until: now + FLASH_DURATION,
            }
        };
        trace!(highlight = ?self.highlight, "input changed");
        true
    }

    /// Advance the flash timer
    pub fn tick(&mut self, now: Instant) -> Highlight {
        if let Highlight::Flash { until } = self.highlight {
            if now >= until {
                self.highlight = Highlight::Hidden;
                trace!("keyboard flash expired");
            }
        }
        self.highlight
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_keyboard_visible(&self) -> bool {
        !matches!(self.highlight, Highlight::Hidden)
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Switch layouts, recomputing the signature
    pub fn set_layout(&mut self, layout: &'static Layout) {
        self.layout = layout;
        self.refresh();
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn path_d(&self) -> String {
        self.signature.path_d()
    }

    pub fn active_keys(&self) -> &BTreeSet<&'static str> {
        self.signature.active_keys()
    }

    pub fn export_svg(&self) -> Option<ExportFile> {
        renderer::export_svg(&self.signature, &self.export)
    }

    pub fn export_png(&self) -> Option<ExportFile> {
        renderer::export_png(&self.signature, &self.export)
    }

    pub fn export_png_async<F>(&self, on_complete: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(ExportFile) + Send + 'static,
    {
        renderer::export_png_async(&self.signature, &self.export, on_complete)
    }

    fn refresh(&mut self) {
        if !self.signature.is_for(&self.input, self.layout) {
            self.signature = Signature::compute(&self.input, self.layout, &self.grid);
        }
    }
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new(
            crate::keyboard::default_layout(),
            GridConfig::default(),
            ExportConfig::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::ANSI;

    #[test]
    fn test_starts_idle_and_empty() {
        let pad = SignaturePad::default();
        assert_eq!(pad.input(), "");
        assert_eq!(pad.highlight(), Highlight::Idle);
        assert!(pad.is_keyboard_visible());
        assert_eq!(pad.path_d(), "");
        assert!(pad.export_svg().is_none());
        assert!(pad.export_png().is_none());
    }

    #[test]
    fn test_flash_then_hide() {
        let t0 = Instant::now();
        let mut pad = SignaturePad::default();
        assert!(pad.set_input("as", t0));
        assert_eq!(
            pad.highlight(),
            Highlight::Flash {
                until: t0 + FLASH_DURATION
            }
        );
        assert_eq!(pad.path_d(), "M 108 181 L 156 181");

        assert!(matches!(
            pad.tick(t0 + Duration::from_millis(50)),
            Highlight::Flash { .. }
        ));
        assert_eq!(pad.tick(t0 + FLASH_DURATION), Highlight::Hidden);
        assert!(!pad.is_keyboard_visible());
    }

    #[test]
    fn test_change_rearms_flash() {
        let t0 = Instant::now();
        let mut pad = SignaturePad::default();
        pad.set_input("a", t0);
        pad.tick(t0 + FLASH_DURATION);
        assert_eq!(pad.highlight(), Highlight::Hidden);

        let t1 = t0 + Duration::from_secs(1);
        pad.apply(&InputEvent::Text("s".into()), t1);
        assert_eq!(
            pad.highlight(),
            Highlight::Flash {
                until: t1 + FLASH_DURATION
            }
        );
    }

    #[test]
    fn test_unchanged_input_keeps_state() {
        let t0 = Instant::now();
        let mut pad = SignaturePad::default();
        pad.set_input("a", t0);
        pad.tick(t0 + FLASH_DURATION);
        assert!(!pad.set_input("a", t0 + FLASH_DURATION * 2));
        assert_eq!(pad.highlight(), Highlight::Hidden);
    }

    #[test]
    fn test_clearing_returns_to_idle() {
        let t0 = Instant::now();
        let mut pad = SignaturePad::default();
        pad.set_input("a", t0);
        pad.apply(&InputEvent::Backspace, t0);
        assert_eq!(pad.highlight(), Highlight::Idle);
        assert!(pad.active_keys().is_empty());
        assert_eq!(pad.tick(t0 + FLASH_DURATION), Highlight::Idle);
    }

    #[test]
    fn test_key_clicks_drive_signature() {
        let t0 = Instant::now();
        let mut pad = SignaturePad::default();
        for id in ["KeyH", "KeyI", "ShiftLeft", "Numpad1"] {
            pad.apply(&InputEvent::Key(ANSI.key(id).unwrap()), t0);
        }
        assert_eq!(pad.input(), "HI[Numpad1]");
        assert_eq!(
            pad.active_keys().iter().copied().collect::<Vec<_>>(),
            vec!["KeyH", "KeyI", "Numpad1"]
        );
        assert_eq!(pad.signature().current_key().map(|k| k.id), Some("Numpad1"));
    }

    #[test]
    fn test_exports_follow_input() {
        let mut pad = SignaturePad::default();
        pad.set_input("Ada", Instant::now());
        let svg = pad.export_svg().unwrap();
        assert_eq!(svg.file_name, "Ada-signature.svg");
        let png = pad.export_png().unwrap();
        assert_eq!(png.file_name, "Ada-signature.png");
    }
}
