use crate::app::AppState;
use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::types::*;

pub fn handle_input_key(state: &mut AppState, key: &AppKeyEvent) {
    if handle_goal_input_key(&mut state.input, key) {
        state.sync_draft();
        return;
    }
    match key.code {
        AppKeyCode::Enter => {
            state.add_goal();
        }
        AppKeyCode::Tab | AppKeyCode::Down | AppKeyCode::Esc => focus_list(state),
        _ => {}
    }
}

pub fn handle_list_key(state: &mut AppState, key: &AppKeyEvent) {
    match key.code {
        AppKeyCode::Up | AppKeyCode::Char('k') => move_selection(state, -1),
        AppKeyCode::Down | AppKeyCode::Char('j') => move_selection(state, 1),
        AppKeyCode::PageUp => move_selection(state, -10),
        AppKeyCode::PageDown => move_selection(state, 10),
        AppKeyCode::Home | AppKeyCode::Char('g') => {
            if !state.store.is_empty() {
                state.list_state.select(Some(0));
            }
        }
        AppKeyCode::End | AppKeyCode::Char('G') => {
            if !state.store.is_empty() {
                state.list_state.select(Some(state.store.len() - 1));
            }
        }
        AppKeyCode::Tab | AppKeyCode::BackTab | AppKeyCode::Esc | AppKeyCode::Char('i') => {
            state.focus = Focus::Input;
        }
        _ => {}
    }
}

/// Lists with nothing in them can't take focus.
pub fn focus_list(state: &mut AppState) {
    if state.store.is_empty() {
        return;
    }
    if state.selected_goal().is_none() {
        state.list_state.select(Some(state.store.len() - 1));
    }
    state.focus = Focus::GoalList;
}

pub fn move_selection(state: &mut AppState, delta: i64) {
    let len = state.store.len();
    if len == 0 {
        return;
    }
    let current = state.selected_goal().unwrap_or(len - 1) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1);
    state.list_state.select(Some(next as usize));
}
