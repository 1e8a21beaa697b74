use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::style;

// ── Goal input field ─────────────────────────────────────────────────────

pub const DEFAULT_PLACEHOLDER: &str = "Your course goal!";

pub fn goal_input(value: &str, placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::from([value.to_string()]);
    textarea.move_cursor(CursorMove::End);
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.set_placeholder_style(Style::default().fg(style::GRAY_DIM));
    textarea.set_cursor_line_style(Style::default());
    textarea
}

/// The field is single-line, so joining is only a guard against pasted
/// content that slipped through with breaks.
pub fn goal_input_value(textarea: &TextArea<'_>) -> String {
    textarea.lines().join(" ")
}

/// Returns true if the key was consumed by the field.
pub fn handle_goal_input_key(textarea: &mut TextArea<'static>, key: &AppKeyEvent) -> bool {
    let Some(input) = app_key_to_textarea_input(key) else {
        return false;
    };

    let changed = textarea.input(input);
    changed
        || matches!(
            key.code,
            AppKeyCode::Left | AppKeyCode::Right | AppKeyCode::Home | AppKeyCode::End
        )
}

pub fn app_key_to_textarea_input(key: &AppKeyEvent) -> Option<Input> {
    // Ctrl+Backspace / Ctrl+Delete delete a word, which the textarea binds to Alt.
    if key.ctrl {
        let word_key = match key.code {
            AppKeyCode::Backspace => Key::Backspace,
            AppKeyCode::Delete => Key::Delete,
            _ => return None,
        };
        return Some(Input {
            key: word_key,
            ctrl: false,
            alt: true,
            shift: key.shift,
        });
    }

    let mapped = match key.code {
        AppKeyCode::Char(c) => Key::Char(c),
        AppKeyCode::Backspace => Key::Backspace,
        AppKeyCode::Delete => Key::Delete,
        AppKeyCode::Left => Key::Left,
        AppKeyCode::Right => Key::Right,
        AppKeyCode::Home => Key::Home,
        AppKeyCode::End => Key::End,
        _ => return None,
    };

    Some(Input {
        key: mapped,
        ctrl: false,
        alt: key.alt,
        shift: key.shift,
    })
}

// ── Enums ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    GoalList,
}

/// What a screen cell belongs to, for mouse handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    AddButton,
    /// Row offset inside the list viewport, not a goal index.
    ListRow(u16),
}
