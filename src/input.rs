//! Editing events applied to the typed text

use crate::keyboard::Key;
use crate::parser::lex;

/// Key identifiers that never produce text
const MODIFIERS: &[&str] = &[
    "ShiftLeft",
    "ShiftRight",
    "ControlLeft",
    "ControlRight",
    "AltLeft",
    "AltRight",
    "MetaLeft",
    "MetaRight",
    "ContextMenu",
    "CapsLock",
    "Tab",
    "Escape",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
];

/// A change to the typed text
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Append typed text
    Text(String),
    /// Replace the whole text (editing the text field directly)
    Replace(String),
    /// A click on a rendered key
    Key(&'static Key),
    /// Remove the last token
    Backspace,
}

/// Whether a key identifier is a modifier or function key
pub fn is_modifier(id: &str) -> bool {
    MODIFIERS.contains(&id)
}

/// Apply an event to `text`, returning whether it changed
pub fn apply(text: &mut String, event: &InputEvent) -> bool {
    let before = text.len();
    match event {
        InputEvent::Text(s) => {
            text.push_str(s);
            !s.is_empty()
        }
        InputEvent::Replace(s) => {
            let changed = *text != *s;
            text.clone_from(s);
            changed
        }
        InputEvent::Key(key) => {
            press_key(text, key);
            // Appends and deletions always change the length
            text.len() != before
        }
        InputEvent::Backspace => {
            backspace(text);
            text.len() != before
        }
    }
}

/// Apply a click on a rendered key
///
/// Main-block keys with a one-character legend append it. Keypad keys, the
/// bracket keys and keys without such a legend append a `[Identifier]`
/// reference, so the clicked key is the one that resolves.
pub fn press_key(text: &mut String, key: &Key) {
    match key.id {
        "Backspace" => backspace(text),
        "Space" => text.push(' '),
        "Enter" | "NumpadEnter" => text.push('\n'),
        id if is_modifier(id) => {}
        _ if types_legend(key) => text.push_str(key.label),
        id => {
            text.push('[');
            text.push_str(id);
            text.push(']');
        }
    }
}

/// Whether clicking `key` appends its legend as typed text
///
/// Keypad legends duplicate the main block and a bracket legend would open or
/// close a `[...]` group, so neither can stand for the key itself.
fn types_legend(key: &Key) -> bool {
    key.has_char_label()
        && !key.id.starts_with("Numpad")
        && !matches!(key.label, "[" | "]")
}

/// Remove the last token: a whole `[...]` group or one character
pub fn backspace(text: &mut String) {
    let start = lex(text).last().map(|(_, span)| span.start);
    if let Some(start) = start {
        text.truncate(start);
    }
}
