use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub theme: &'a Theme,
    pub visible: usize,
    pub total: usize,
    pub search_term: &'a str,
}

impl Header<'_> {
    fn stats_text(&self) -> String {
        if self.search_term.is_empty() {
            format!(" {} commands ", self.total)
        } else {
            format!(" {} of {} commands ", self.visible, self.total)
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_stats = Style::default().fg(logo_bg).bg(stats_bg);
        let sep_stats_base = Style::default().fg(stats_bg).bg(base_bg);

        let spans = vec![
            Span::styled(
                format!(" {} GIT BUDDY ", glyphs::LOGO),
                self.theme.header_logo,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_stats),
            Span::styled(self.stats_text(), self.theme.header_stats),
            Span::styled(glyphs::SEP_RIGHT, sep_stats_base),
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
