use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::AppState;
use crate::style;
use crate::types::*;
use crate::utils::*;

const ADD_BUTTON_LABEL: &str = "Add goal";
// One column of padding on each side of a goal card.
const CARD_PADDING: usize = 1;

// ── Layout ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub list: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input row
            Constraint::Min(3),    // Goals
            Constraint::Length(1), // Help
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        input: input_row[0],
        button: input_row[1],
        list: rows[2],
        help: rows[3],
    }
}

fn goal_list_inner(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(screen_layout(area).list)
}

pub fn goal_list_wrap_width(area: Rect) -> usize {
    (goal_list_inner(area).width as usize).saturating_sub(CARD_PADDING * 2)
}

pub fn click_target(area: Rect, column: u16, row: u16) -> Option<ClickTarget> {
    let layout = screen_layout(area);
    if rect_contains(layout.button, column, row) {
        return Some(ClickTarget::AddButton);
    }
    if rect_contains(layout.input, column, row) {
        return Some(ClickTarget::Input);
    }
    let inner = goal_list_inner(area);
    if rect_contains(inner, column, row) {
        return Some(ClickTarget::ListRow(row - inner.y));
    }
    None
}

/// Resolve a row inside the list viewport to a goal index, taking the
/// current scroll offset and wrapped card heights into account.
pub fn goal_at_row(state: &AppState, width: usize, row: u16) -> Option<usize> {
    let mut top = 0usize;
    let goals = state.store.goals();
    for (idx, goal) in goals.iter().enumerate().skip(state.list_state.offset()) {
        let height = wrap_text(goal, width).len();
        if (row as usize) < top + height {
            return Some(idx);
        }
        top += height;
    }
    None
}

// ── Goal cards ───────────────────────────────────────────────────────────

pub fn build_goal_items(goals: &[String], width: usize) -> Vec<ListItem<'static>> {
    let pad = " ".repeat(CARD_PADDING);
    goals
        .iter()
        .map(|goal| {
            let lines: Vec<Line> = wrap_text(goal, width)
                .into_iter()
                .map(|line| Line::from(format!("{pad}{line}{pad}")))
                .collect();
            ListItem::new(lines).style(Style::default().fg(style::CARD_FG).bg(style::CARD_BG))
        })
        .collect()
}

// ── Main UI ──────────────────────────────────────────────────────────────

fn block_style(state: &AppState, target: Focus) -> Style {
    if state.focus == target {
        Style::default().fg(style::BLUE)
    } else {
        Style::default().fg(style::BORDER)
    }
}

/// Render the whole screen. Takes `&mut` because the list scroll offset and
/// the input cursor style live in widget state.
pub fn ui(f: &mut ratatui::Frame, state: &mut AppState) {
    let layout = screen_layout(f.area());

    let header = Paragraph::new(Line::from(goal_count_label(state.store.len()))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(state.title.clone()),
    );
    f.render_widget(header, layout.header);

    render_input(f, state, layout.input);
    render_add_button(f, layout.button);
    render_goal_list(f, state, layout.list);

    let help = match state.focus {
        Focus::Input => "Type a goal • Enter/click Add goal: add • Tab: list • Ctrl+C: quit",
        Focus::GoalList => "↑↓/jk: scroll • g/G: first/last • Tab/i: edit • q: quit",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(style::GRAY_DIM)),
        layout.help,
    );
}

fn render_input(f: &mut ratatui::Frame, state: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(block_style(state, Focus::Input));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cursor = if state.focus == Focus::Input {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    state.input.set_cursor_style(cursor);
    f.render_widget(&state.input, inner);
}

fn render_add_button(f: &mut ratatui::Frame, area: Rect) {
    let button = Paragraph::new(Span::styled(
        ADD_BUTTON_LABEL,
        Style::default()
            .fg(style::BLUE)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style::BLUE)),
    );
    f.render_widget(button, area);
}

fn render_goal_list(f: &mut ratatui::Frame, state: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Goals")
        .border_style(block_style(state, Focus::GoalList));

    if state.store.is_empty() {
        let hint = Paragraph::new("Nothing here yet. Type a goal above and press Enter.")
            .style(Style::default().fg(style::GRAY_DIM))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let width = (block.inner(area).width as usize).saturating_sub(CARD_PADDING * 2);
    let items = build_goal_items(state.store.goals(), width);

    let highlight = if state.focus == Focus::GoalList {
        Style::default()
            .bg(style::CARD_SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut state.list_state);
}
