use ratatui::style::Color;

// Centralized colors for pad rendering. Kept as small helpers so a future
// terminal-capability mapping can slot in without touching call sites.

pub fn pad_bg() -> Color {
    Color::DarkGray
}
pub fn pad_fg() -> Color {
    Color::White
}
pub fn pad_title_bg() -> Color {
    Color::Gray
}
pub fn pad_title_fg() -> Color {
    Color::Black
}
pub fn pad_item_fg() -> Color {
    Color::White
}
