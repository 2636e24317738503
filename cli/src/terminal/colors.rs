use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const RECORD_ID: Color = Color::Cyan;
pub const SEATS_FREE: Color = Color::Green;
pub const SEATS_FULL: Color = Color::Red;
