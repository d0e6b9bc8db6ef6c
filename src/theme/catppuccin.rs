use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    bg: Color::Rgb(30, 30, 46),
    bg_raised: Color::Rgb(24, 24, 37),
    bg_deep: Color::Rgb(17, 17, 27),
    fg: Color::Rgb(205, 214, 244),
    fg_muted: Color::Rgb(166, 173, 200),
    fg_soft: Color::Rgb(186, 194, 222),
    surface: Color::Rgb(49, 50, 68),
    border: Color::Rgb(88, 91, 112),
    hint: Color::Rgb(108, 112, 134),
    subtle: Color::Rgb(127, 132, 156),
    accent: Color::Rgb(137, 180, 250),
    selection: Color::Rgb(180, 190, 254),
    command: Color::Rgb(148, 226, 213),
    success: Color::Rgb(166, 227, 161),
    edit: Color::Rgb(249, 226, 175),
    token: Color::Rgb(250, 179, 135),
    category: Color::Rgb(203, 166, 247),
};
