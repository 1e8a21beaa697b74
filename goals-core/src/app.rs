use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tui_textarea::TextArea;

use crate::handlers::*;
use crate::key_event::{AppKeyCode, AppKeyEvent, AppMouseEvent};
use crate::store::{CommitOutcome, CommitPolicy, GoalListStore};
use crate::types::*;
use crate::ui;

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub policy: CommitPolicy,
    pub placeholder: String,
    pub title: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            policy: CommitPolicy::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            title: "Course Goals".to_string(),
        }
    }
}

/// Central application state: the goal store plus everything the screen
/// needs to present it.
pub struct AppState {
    pub store: GoalListStore,
    pub input: TextArea<'static>,
    pub placeholder: String,
    pub title: String,
    pub focus: Focus,
    pub list_state: ListState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self::with_store(GoalListStore::with_policy(options.policy), options)
    }

    /// Wrap an existing store, e.g. one that already has subscribers.
    pub fn with_store(store: GoalListStore, options: AppOptions) -> Self {
        let input = goal_input(store.draft(), &options.placeholder);
        Self {
            store,
            input,
            placeholder: options.placeholder,
            title: options.title,
            focus: Focus::Input,
            list_state: ListState::default(),
        }
    }

    /// Dispatch a key event to the handler for the focused block.
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: AppKeyEvent) -> bool {
        if key.is_ctrl_c() {
            return true;
        }
        match self.focus {
            Focus::Input => handle_input_key(self, &key),
            Focus::GoalList => {
                if key.code == AppKeyCode::Char('q') && !key.ctrl && !key.alt {
                    return true;
                }
                handle_list_key(self, &key);
            }
        }
        false
    }

    pub fn handle_paste(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
            .collect();
        self.focus = Focus::Input;
        self.input.insert_str(flattened);
        self.sync_draft();
    }

    /// `area` is the full frame the screen was last drawn into.
    pub fn handle_mouse(&mut self, event: AppMouseEvent, area: Rect) {
        match event {
            AppMouseEvent::LeftClick { column, row } => {
                match ui::click_target(area, column, row) {
                    Some(ClickTarget::AddButton) => {
                        self.add_goal();
                    }
                    Some(ClickTarget::Input) => self.focus = Focus::Input,
                    Some(ClickTarget::ListRow(offset)) => {
                        let width = ui::goal_list_wrap_width(area);
                        if let Some(idx) = ui::goal_at_row(self, width, offset) {
                            self.focus = Focus::GoalList;
                            self.list_state.select(Some(idx));
                        }
                    }
                    None => {}
                }
            }
            AppMouseEvent::ScrollUp => move_selection(self, -1),
            AppMouseEvent::ScrollDown => move_selection(self, 1),
        }
    }

    /// The "Add goal" action: commit the draft and bring the new entry into
    /// view. The field is re-synced since the policy may have cleared the draft.
    pub fn add_goal(&mut self) -> CommitOutcome {
        let outcome = self.store.commit_draft();
        if let Some(index) = outcome.appended() {
            self.list_state.select(Some(index));
        }
        if goal_input_value(&self.input) != self.store.draft() {
            self.input = goal_input(self.store.draft(), &self.placeholder);
        }
        outcome
    }

    /// Push the field's full text into the store.
    pub fn sync_draft(&mut self) {
        let value = goal_input_value(&self.input);
        self.store.set_draft(value);
    }

    pub fn selected_goal(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|idx| *idx < self.store.len())
    }
}
