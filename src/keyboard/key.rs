//! Key and layout types

/// A physical key on a keyboard layout
///
/// Positions are expressed in key units: `column` is the left edge of the key
/// (fractional for staggered rows) and `row` is the row index from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Key {
    /// Stable identifier, following `KeyboardEvent.code` names (e.g. `KeyA`, `Numpad9`)
    pub id: &'static str,
    /// Printed legend; may be multi-character (`Esc`) or empty (`Space`)
    pub label: &'static str,
    pub column: f64,
    pub row: u8,
    /// Width in key units
    pub width: f64,
    /// Height in key units
    pub height: f64,
}

impl Key {
    /// Create a 1x1 key
    pub const fn new(id: &'static str, label: &'static str, column: f64, row: u8) -> Self {
        Self {
            id,
            label,
            column,
            row,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Set the width multiplier
    pub const fn wide(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// Set the height multiplier
    pub const fn tall(self, height: f64) -> Self {
        Self { height, ..self }
    }

    /// Whether this key's legend is a single printable character
    pub fn has_char_label(&self) -> bool {
        let mut chars = self.label.chars();
        matches!((chars.next(), chars.next()), (Some(_), None))
    }

    /// Case-insensitive comparison of the legend against typed text
    pub fn label_matches(&self, text: &str) -> bool {
        !self.label.is_empty() && self.label.to_lowercase() == text.to_lowercase()
    }
}

/// A named, ordered catalog of keys
#[derive(Debug)]
pub struct Layout {
    name: &'static str,
    keys: &'static [Key],
}

impl Layout {
    pub const fn new(name: &'static str, keys: &'static [Key]) -> Self {
        Self { name, keys }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Keys in catalog order
    pub fn keys(&self) -> &'static [Key] {
        self.keys
    }

    /// Find a key by identifier
    pub fn key(&self, id: &str) -> Option<&'static Key> {
        self.keys.iter().find(|k| k.id == id)
    }

    /// Extent of the layout in key units (columns, rows)
    pub fn extent(&self) -> (f64, f64) {
        self.keys.iter().fold((0.0_f64, 0.0_f64), |(w, h), k| {
            (
                w.max(k.column + k.width),
                h.max(f64::from(k.row) + k.height),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SMALL: Layout = Layout::new(
        "small",
        &[
            Key::new("KeyQ", "Q", 0.5, 0),
            Key::new("Space", "", 0.0, 1).wide(6.25),
            Key::new("NumpadAdd", "+", 7.0, 0).tall(2.0),
        ],
    );

    #[test]
    fn test_key_defaults() {
        let key = Key::new("KeyA", "A", 1.75, 3);
        assert_eq!(key.width, 1.0);
        assert_eq!(key.height, 1.0);
    }

    #[test]
    fn test_label_matches_ignores_case() {
        let key = Key::new("KeyA", "A", 1.75, 3);
        assert!(key.label_matches("a"));
        assert!(key.label_matches("A"));
        assert!(!key.label_matches("s"));
    }

    #[test]
    fn test_empty_label_never_matches() {
        let key = Key::new("Space", "", 3.75, 5);
        assert!(!key.label_matches(""));
    }

    #[test]
    fn test_char_label() {
        assert!(Key::new("KeyA", "A", 0.0, 0).has_char_label());
        assert!(!Key::new("Escape", "Esc", 0.0, 0).has_char_label());
        assert!(!Key::new("Space", "", 0.0, 0).has_char_label());
    }

    #[test]
    fn test_lookup_and_extent() {
        assert_eq!(SMALL.key("Space").map(|k| k.width), Some(6.25));
        assert!(SMALL.key("KeyZ").is_none());
        assert_eq!(SMALL.extent(), (8.0, 2.0));
    }
}
