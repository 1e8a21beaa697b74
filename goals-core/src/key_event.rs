/// Terminal-independent key event. Frontends convert their backend's events
/// into this before handing them to [`crate::app::AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyEvent {
    pub code: AppKeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKeyCode {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Tab,
    BackTab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Esc,
    Other,
}

impl AppKeyEvent {
    pub fn new(code: AppKeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn ctrl(code: AppKeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::new(code)
        }
    }

    pub fn is_ctrl_c(&self) -> bool {
        self.ctrl && self.code == AppKeyCode::Char('c')
    }
}

impl From<AppKeyCode> for AppKeyEvent {
    fn from(code: AppKeyCode) -> Self {
        Self::new(code)
    }
}

/// Mouse gesture already resolved to terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMouseEvent {
    LeftClick { column: u16, row: u16 },
    ScrollUp,
    ScrollDown,
}
