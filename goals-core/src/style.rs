use ratatui::style::Color;

pub const BLUE: Color = Color::Rgb(0x89, 0xB4, 0xFA);
pub const GRAY_DIM: Color = Color::DarkGray;
pub const BORDER: Color = Color::Rgb(0xCC, 0xCC, 0xCC);

// Goal cards
pub const CARD_BG: Color = Color::Black;
pub const CARD_FG: Color = Color::White;
pub const CARD_SELECTED_BG: Color = Color::Rgb(0x5E, 0x0A, 0xCC);
