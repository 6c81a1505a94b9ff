//! Keyboard Actions and Shortcuts
//!
//! Gallery-level keyboard shortcuts, plus the mapping from raw key presses to
//! text edits used by the input components.

use gpui::{Action, KeyBinding, Keystroke};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::state::EditKey;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Gallery navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Show the next component page
    Next,
    /// Show the previous component page
    Previous,
}

/// Notification actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NotifyAction {
    /// Close every visible toast
    DismissAll,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "ctrl" => {
                #[cfg(target_os = "macos")]
                { "⌃" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "enter" => "Enter",
            "space" => "Space",
            "backspace" => {
                #[cfg(target_os = "macos")]
                { "⌫" }
                #[cfg(not(target_os = "macos"))]
                { "Backspace" }
            }
            "escape" => "Esc",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new("secondary-]", NavAction::Next, None),
        KeyBinding::new("secondary-[", NavAction::Previous, None),
        // Notifications
        KeyBinding::new("secondary-shift-x", NotifyAction::DismissAll, None),
    ]
}

/// Translate a key press into a text edit
pub fn edit_key(keystroke: &Keystroke) -> Option<EditKey> {
    let modifiers = &keystroke.modifiers;
    map_key(
        &keystroke.key,
        keystroke.key_char.as_deref(),
        modifiers.shift,
        modifiers.control || modifiers.platform || modifiers.function,
    )
}

/// Key name mapping behind [`edit_key`]. Typed characters carrying a
/// command modifier are shortcuts, not text.
pub fn map_key(key: &str, key_char: Option<&str>, shift: bool, command: bool) -> Option<EditKey> {
    let edit = match key {
        "backspace" => EditKey::Backspace,
        "delete" => EditKey::Delete,
        "left" => EditKey::Left,
        "right" => EditKey::Right,
        "up" => EditKey::Up,
        "down" => EditKey::Down,
        "home" => EditKey::Home,
        "end" => EditKey::End,
        "enter" => EditKey::Enter,
        "escape" => EditKey::Escape,
        "tab" => EditKey::Tab { shift },
        _ if command => return None,
        "space" => EditKey::Insert(" ".to_string()),
        _ => match key_char {
            Some(text) if !text.is_empty() && !text.chars().any(char::is_control) => {
                EditKey::Insert(text.to_string())
            }
            _ => return None,
        },
    };
    Some(edit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(map_key("backspace", None, false, false), Some(EditKey::Backspace));
        assert_eq!(
            map_key("tab", None, true, false),
            Some(EditKey::Tab { shift: true })
        );
    }

    #[test]
    fn test_typed_characters() {
        assert_eq!(
            map_key("a", Some("A"), true, false),
            Some(EditKey::Insert("A".to_string()))
        );
        assert_eq!(
            map_key("space", Some(" "), false, false),
            Some(EditKey::Insert(" ".to_string()))
        );
    }

    #[test]
    fn test_shortcuts_are_not_text() {
        assert_eq!(map_key("c", Some("c"), false, true), None);
        assert_eq!(map_key("f1", None, false, false), None);
    }

    #[test]
    fn test_humanize_plain_key() {
        assert!(humanize_keystroke("secondary-q").ends_with('Q'));
    }
}
