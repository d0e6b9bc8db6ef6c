use crate::app::state::ThemeSelectionState;
use crate::theme::{glyphs, PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered, draw_drop_shadow};

const MODAL_WIDTH: u16 = 44;

/// Palette picker. Each row previews the palette's accent colors; the palette in
/// use is tagged.
pub struct ThemeSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ThemeSelectionState,
    pub current: PaletteType,
}

impl ThemeSelectionModal<'_> {
    fn row(&self, index: usize, palette: PaletteType) -> Line<'static> {
        let highlighted = index == self.state.selected_index;
        let style = if highlighted {
            self.theme.list_selected
        } else {
            self.theme.list_item
        };
        let pointer = if highlighted { glyphs::POINTER } else { " " };

        let colors = palette.palette();
        let mut spans = vec![Span::styled(format!(" {pointer} {:<20}", palette.label()), style)];
        for color in [
            colors.accent,
            colors.success,
            colors.edit,
            colors.token,
            colors.category,
        ] {
            spans.push(Span::styled(glyphs::SWATCH, Style::default().fg(color).bg(colors.bg)));
        }
        if palette == self.current {
            spans.push(Span::styled(" active", self.theme.dimmed));
        }
        Line::from(spans)
    }
}

impl Widget for ThemeSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.state.themes.len() as u16 + 2;
        let modal_area = centered(
            area,
            Constraint::Length(MODAL_WIDTH.min(area.width)),
            Constraint::Length(height.min(area.height)),
        );
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(Span::styled(" SELECT THEME ", self.theme.header_active)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.modal);

        let lines: Vec<Line> = self
            .state
            .themes
            .iter()
            .enumerate()
            .map(|(i, palette)| self.row(i, *palette))
            .collect();

        Paragraph::new(lines).block(block).render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(modal: ThemeSelectionModal) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| f.render_widget(modal, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_marks_highlighted_and_active_palettes() {
        let theme = Theme::default();
        let mut state = ThemeSelectionState::starting_at(PaletteType::Nord);
        state.selected_index = 2;
        let lines = screen(ThemeSelectionModal {
            theme: &theme,
            state: &state,
            current: PaletteType::Nord,
        });

        let row = |label: &str| lines.iter().find(|l| l.contains(label)).unwrap().clone();
        assert!(row("Nord").contains("active"));
        assert!(!row("Gruvbox").contains("active"));
        assert!(row("Gruvbox").contains(glyphs::POINTER));
        assert!(!row("Nord").contains(glyphs::POINTER));
        assert!(lines.iter().any(|l| l.contains("SELECT THEME")));
    }

    #[test]
    fn test_swatch_uses_palette_colors() {
        let theme = Theme::default();
        let state = ThemeSelectionState::starting_at(PaletteType::CatppuccinMocha);
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    ThemeSelectionModal {
                        theme: &theme,
                        state: &state,
                        current: PaletteType::CatppuccinMocha,
                    },
                    f.area(),
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let gruvbox_accent = PaletteType::Gruvbox.palette().accent;
        let found = (0..10u16)
            .flat_map(|y| (0..60u16).map(move |x| (x, y)))
            .any(|pos| buffer[pos].symbol() == "\u{2588}" && buffer[pos].fg == gruvbox_accent);
        assert!(found);
    }
}
