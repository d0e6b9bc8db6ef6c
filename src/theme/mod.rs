use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header: Style,

    pub search_text: Style,
    pub search_hint: Style,

    pub category: Style,
    pub category_count: Style,

    pub card_name: Style,
    pub card_description: Style,
    pub card_selected: Style,
    pub command_prompt: Style,
    pub command_text: Style,
    pub command_token: Style,
    pub edit_marker: Style,
    pub edit_value: Style,
    pub edit_hint: Style,
    pub copied_marker: Style,

    pub status_info: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub modal: Style,
    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            PaletteType::CatppuccinMocha => &catppuccin::CATPPUCCIN_MOCHA,
            PaletteType::Nord => &nord::NORD,
            PaletteType::Gruvbox => &gruvbox::GRUVBOX,
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        Self::from_palette(t.palette())
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.border),
            border_focus: Style::default().fg(p.accent),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.bg_deep)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface).fg(p.fg_soft),
            header_active: Style::default()
                .bg(p.success)
                .fg(p.bg_deep)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.bg).fg(p.fg),

            search_text: Style::default().fg(p.fg),
            search_hint: Style::default().fg(p.hint).add_modifier(Modifier::ITALIC),

            category: Style::default().fg(p.category).add_modifier(Modifier::BOLD),
            category_count: Style::default().fg(p.subtle),

            card_name: Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
            card_description: Style::default().fg(p.fg_muted),
            card_selected: Style::default().bg(dim_color(p.accent, 0.25)),
            command_prompt: Style::default().fg(p.success).add_modifier(Modifier::BOLD),
            command_text: Style::default().fg(p.command),
            command_token: Style::default().fg(p.token).add_modifier(Modifier::ITALIC),
            edit_marker: Style::default().fg(p.edit),
            edit_value: Style::default()
                .fg(p.edit)
                .add_modifier(Modifier::UNDERLINED),
            edit_hint: Style::default().fg(p.hint).add_modifier(Modifier::ITALIC),
            copied_marker: Style::default().fg(p.success).add_modifier(Modifier::BOLD),

            status_info: Style::default()
                .bg(p.accent)
                .fg(p.bg_deep)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.bg_deep).fg(p.fg_muted),
            footer: Style::default().bg(p.bg_deep).fg(p.fg_muted),

            modal: Style::default().bg(p.bg_raised).fg(p.fg),
            highlight: Style::default().bg(p.surface).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.selection)
                .fg(p.bg_deep)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.fg),
            dimmed: Style::default().fg(p.hint).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_produce_distinct_themes() {
        let themes: Vec<_> = PaletteType::all()
            .iter()
            .map(|t| Theme::from_palette_type(*t))
            .collect();
        assert_ne!(themes[0], themes[1]);
        assert_ne!(themes[1], themes[2]);
    }

    #[test]
    fn test_palette_names_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let parsed: Wrapper = toml::from_str("theme = \"catppuccinmocha\"").unwrap();
        assert_eq!(parsed.theme, PaletteType::CatppuccinMocha);
        let parsed: Wrapper = toml::from_str("theme = \"gruvbox\"").unwrap();
        assert_eq!(parsed.theme, PaletteType::Gruvbox);
    }
}
