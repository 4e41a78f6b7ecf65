use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(0x42, 0x85, 0xf4);
pub const DANGER: Color = Color::Rgb(0xea, 0x43, 0x35);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const MUTED_TEXT: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const CARD_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
