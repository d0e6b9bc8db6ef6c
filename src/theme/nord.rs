use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    bg: Color::Rgb(46, 52, 64),
    bg_raised: Color::Rgb(59, 66, 82),
    bg_deep: Color::Rgb(43, 48, 59),
    fg: Color::Rgb(236, 239, 244),
    fg_muted: Color::Rgb(216, 222, 233),
    fg_soft: Color::Rgb(229, 233, 240),
    surface: Color::Rgb(67, 76, 94),
    border: Color::Rgb(76, 86, 106),
    hint: Color::Rgb(97, 110, 136),
    subtle: Color::Rgb(136, 192, 208),
    accent: Color::Rgb(129, 161, 193),
    selection: Color::Rgb(94, 129, 172),
    command: Color::Rgb(143, 188, 187),
    success: Color::Rgb(163, 190, 140),
    edit: Color::Rgb(235, 203, 139),
    token: Color::Rgb(208, 135, 112),
    category: Color::Rgb(180, 142, 173),
};
