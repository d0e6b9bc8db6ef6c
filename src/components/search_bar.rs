use crate::app::state::AppTextArea;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The search field. Shows the live text area while focused, the active term otherwise.
pub struct SearchBar<'a> {
    pub theme: &'a Theme,
    pub term: &'a str,
    pub input: Option<&'a AppTextArea<'a>>,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.input.is_some();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{} SEARCH", glyphs::SEARCH),
                    if focused {
                        self.theme.header_active
                    } else {
                        self.theme.header_stats
                    },
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(input) = self.input {
            input.render(inner, buf);
        } else if self.term.is_empty() {
            Paragraph::new(Span::styled(
                "Press / to search commands",
                self.theme.search_hint,
            ))
            .render(inner, buf);
        } else {
            Paragraph::new(Span::styled(self.term, self.theme.search_text)).render(inner, buf);
        }
    }
}
