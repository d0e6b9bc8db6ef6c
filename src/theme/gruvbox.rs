use super::palette::Palette;
use ratatui::style::Color;

// Gruvbox dark, medium contrast
pub const GRUVBOX: Palette = Palette {
    bg: Color::Rgb(40, 40, 40),
    bg_raised: Color::Rgb(50, 48, 47),
    bg_deep: Color::Rgb(29, 32, 33),
    fg: Color::Rgb(235, 219, 178),
    fg_muted: Color::Rgb(189, 174, 147),
    fg_soft: Color::Rgb(213, 196, 161),
    surface: Color::Rgb(60, 56, 54),
    border: Color::Rgb(102, 92, 84),
    hint: Color::Rgb(124, 111, 100),
    subtle: Color::Rgb(146, 131, 116),
    accent: Color::Rgb(131, 165, 152),
    selection: Color::Rgb(69, 133, 136),
    command: Color::Rgb(142, 192, 124),
    success: Color::Rgb(184, 187, 38),
    edit: Color::Rgb(250, 189, 47),
    token: Color::Rgb(254, 128, 25),
    category: Color::Rgb(211, 134, 155),
};
