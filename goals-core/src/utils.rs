use ratatui::layout::Rect;

/// Greedy word wrap. Lines that fit keep the text exactly, including runs of
/// spaces; whitespace is only dropped where a line is broken. Words longer
/// than `width` are split across lines. Always returns at least one line so
/// empty goals still occupy a row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.chars().count() <= width {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for (is_space, token) in whitespace_runs(text) {
        let token_len = token.chars().count();
        if current_len + token_len <= width {
            current.push_str(token);
            current_len += token_len;
            continue;
        }
        if current_len > 0 {
            lines.push(current.trim_end().to_string());
            current.clear();
            current_len = 0;
        }
        if is_space {
            continue;
        }
        if token_len > width {
            let chars: Vec<char> = token.chars().collect();
            let mut chunks = chars.chunks(width).map(|c| c.iter().collect::<String>());
            let last = chunks.next_back().unwrap_or_default();
            lines.extend(chunks);
            current_len = last.chars().count();
            current = last;
        } else {
            current.push_str(token);
            current_len = token_len;
        }
    }
    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split into alternating runs of whitespace and non-whitespace.
fn whitespace_runs(text: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (idx, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            runs.push((!space, &text[start..idx]));
            start = idx;
        }
        in_space = Some(space);
    }
    if let Some(space) = in_space {
        runs.push((space, &text[start..]));
    }
    runs
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn goal_count_label(count: usize) -> String {
    match count {
        0 => "no goals yet".to_string(),
        1 => "1 goal".to_string(),
        n => format!("{n} goals"),
    }
}
