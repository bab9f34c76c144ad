//! Full-size ANSI keyboard
//!
//! Rows: 0 function row, 1 number row, 2-4 letter rows, 5 modifier row.
//! Columns are left edges in key units, as in keyboard-layout-editor presets.

use super::key::{Key, Layout};

pub static ANSI: Layout = Layout::new("ansi", ANSI_KEYS);

const ANSI_KEYS: &[Key] = &[
    // Function row
    Key::new("Escape", "Esc", 0.0, 0),
    Key::new("F1", "F1", 2.0, 0),
    Key::new("F2", "F2", 3.0, 0),
    Key::new("F3", "F3", 4.0, 0),
    Key::new("F4", "F4", 5.0, 0),
    Key::new("F5", "F5", 6.5, 0),
    Key::new("F6", "F6", 7.5, 0),
    Key::new("F7", "F7", 8.5, 0),
    Key::new("F8", "F8", 9.5, 0),
    Key::new("F9", "F9", 11.0, 0),
    Key::new("F10", "F10", 12.0, 0),
    Key::new("F11", "F11", 13.0, 0),
    Key::new("F12", "F12", 14.0, 0),
    Key::new("PrintScreen", "PrtSc", 15.25, 0),
    Key::new("ScrollLock", "ScrLk", 16.25, 0),
    Key::new("Pause", "Pause", 17.25, 0),
    // Number row
    Key::new("Backquote", "`", 0.0, 1),
    Key::new("Digit1", "1", 1.0, 1),
    Key::new("Digit2", "2", 2.0, 1),
    Key::new("Digit3", "3", 3.0, 1),
    Key::new("Digit4", "4", 4.0, 1),
    Key::new("Digit5", "5", 5.0, 1),
    Key::new("Digit6", "6", 6.0, 1),
    Key::new("Digit7", "7", 7.0, 1),
    Key::new("Digit8", "8", 8.0, 1),
    Key::new("Digit9", "9", 9.0, 1),
    Key::new("Digit0", "0", 10.0, 1),
    Key::new("Minus", "-", 11.0, 1),
    Key::new("Equal", "=", 12.0, 1),
    Key::new("Backspace", "Backspace", 13.0, 1).wide(2.0),
    Key::new("Insert", "Ins", 15.25, 1),
    Key::new("Home", "Home", 16.25, 1),
    Key::new("PageUp", "PgUp", 17.25, 1),
    Key::new("NumLock", "Num", 18.5, 1),
    Key::new("NumpadDivide", "/", 19.5, 1),
    Key::new("NumpadMultiply", "*", 20.5, 1),
    Key::new("NumpadSubtract", "-", 21.5, 1),
    // Top letter row
    Key::new("Tab", "Tab", 0.0, 2).wide(1.5),
    Key::new("KeyQ", "Q", 1.5, 2),
    Key::new("KeyW", "W", 2.5, 2),
    Key::new("KeyE", "E", 3.5, 2),
    Key::new("KeyR", "R", 4.5, 2),
    Key::new("KeyT", "T", 5.5, 2),
    Key::new("KeyY", "Y", 6.5, 2),
    Key::new("KeyU", "U", 7.5, 2),
    Key::new("KeyI", "I", 8.5, 2),
    Key::new("KeyO", "O", 9.5, 2),
    Key::new("KeyP", "P", 10.5, 2),
    Key::new("BracketLeft", "[", 11.5, 2),
    Key::new("BracketRight", "]", 12.5, 2),
    Key::new("Backslash", "\\", 13.5, 2).wide(1.5),
    Key::new("Delete", "Del", 15.25, 2),
    Key::new("End", "End", 16.25, 2),
    Key::new("PageDown", "PgDn", 17.25, 2),
    Key::new("Numpad7", "7", 18.5, 2),
    Key::new("Numpad8", "8", 19.5, 2),
    Key::new("Numpad9", "9", 20.5, 2),
    Key::new("NumpadAdd", "+", 21.5, 2).tall(2.0),
    // Home row
    Key::new("CapsLock", "Caps", 0.0, 3).wide(1.75),
    Key::new("KeyA", "A", 1.75, 3),
    Key::new("KeyS", "S", 2.75, 3),
    Key::new("KeyD", "D", 3.75, 3),
    Key::new("KeyF", "F", 4.75, 3),
    Key::new("KeyG", "G", 5.75, 3),
    Key::new("KeyH", "H", 6.75, 3),
    Key::new("KeyJ", "J", 7.75, 3),
    Key::new("KeyK", "K", 8.75, 3),
    Key::new("KeyL", "L", 9.75, 3),
    Key::new("Semicolon", ";", 10.75, 3),
    Key::new("Quote", "'", 11.75, 3),
    Key::new("Enter", "Enter", 12.75, 3).wide(2.25),
    Key::new("Numpad4", "4", 18.5, 3),
    Key::new("Numpad5", "5", 19.5, 3),
    Key::new("Numpad6", "6", 20.5, 3),
    // Bottom letter row
    Key::new("ShiftLeft", "Shift", 0.0, 4).wide(2.25),
    Key::new("KeyZ", "Z", 2.25, 4),
    Key::new("KeyX", "X", 3.25, 4),
    Key::new("KeyC", "C", 4.25, 4),
    Key::new("KeyV", "V", 5.25, 4),
    Key::new("KeyB", "B", 6.25, 4),
    Key::new("KeyN", "N", 7.25, 4),
    Key::new("KeyM", "M", 8.25, 4),
    Key::new("Comma", ",", 9.25, 4),
    Key::new("Period", ".", 10.25, 4),
    Key::new("Slash", "/", 11.25, 4),
    Key::new("ShiftRight", "Shift", 12.25, 4).wide(2.75),
    Key::new("ArrowUp", "Up", 16.25, 4),
    Key::new("Numpad1", "1", 18.5, 4),
    Key::new("Numpad2", "2", 19.5, 4),
    Key::new("Numpad3", "3", 20.5, 4),
    Key::new("NumpadEnter", "Enter", 21.5, 4).tall(2.0),
    // Modifier row
    Key::new("ControlLeft", "Ctrl", 0.0, 5).wide(1.25),
    Key::new("MetaLeft", "Meta", 1.25, 5).wide(1.25),
    Key::new("AltLeft", "Alt", 2.5, 5).wide(1.25),
    Key::new("Space", "", 3.75, 5).wide(6.25),
    Key::new("AltRight", "Alt", 10.0, 5).wide(1.25),
    Key::new("MetaRight", "Meta", 11.25, 5).wide(1.25),
    Key::new("ContextMenu", "Menu", 12.5, 5).wide(1.25),
    Key::new("ControlRight", "Ctrl", 13.75, 5).wide(1.25),
    Key::new("ArrowLeft", "Left", 15.25, 5),
    Key::new("ArrowDown", "Down", 16.25, 5),
    Key::new("ArrowRight", "Right", 17.25, 5),
    Key::new("Numpad0", "0", 18.5, 5).wide(2.0),
    Key::new("NumpadDecimal", ".", 20.5, 5),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let mut seen = HashSet::new();
        for key in ANSI.keys() {
            assert!(seen.insert(key.id), "duplicate key id {}", key.id);
        }
        assert_eq!(ANSI.keys().len(), 104);
    }

    #[test]
    fn test_home_row_positions() {
        let a = ANSI.key("KeyA").unwrap();
        assert_eq!((a.column, a.row), (1.75, 3));
        let s = ANSI.key("KeyS").unwrap();
        assert_eq!((s.column, s.row), (2.75, 3));
    }

    #[test]
    fn test_every_letter_has_one_key() {
        for c in 'A'..='Z' {
            let count = ANSI
                .keys()
                .iter()
                .filter(|k| k.label_matches(&c.to_string()))
                .count();
            assert_eq!(count, 1, "letter {c}");
        }
    }

    #[test]
    fn test_digits_are_shared_with_numpad() {
        let sevens: Vec<_> = ANSI
            .keys()
            .iter()
            .filter(|k| k.label_matches("7"))
            .map(|k| k.id)
            .collect();
        assert_eq!(sevens, vec!["Digit7", "Numpad7"]);
    }

    #[test]
    fn test_keys_do_not_overlap_within_row() {
        for row in 0..=5u8 {
            let mut keys: Vec<_> = ANSI.keys().iter().filter(|k| k.row == row).collect();
            keys.sort_by(|a, b| a.column.total_cmp(&b.column));
            for pair in keys.windows(2) {
                assert!(
                    pair[0].column + pair[0].width <= pair[1].column,
                    "{} overlaps {}",
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }
}
