use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" j / \u{2193}", "Select next command"),
            (" k / \u{2191}", "Select previous command"),
            (" g / Home", "First command"),
            (" G / End", "Last command"),
            (" Click", "Select a card (double click copies)"),
        ],
    ),
    (
        "Commands",
        &[
            (" Enter / y", "Copy the selected command"),
            (" e", "Edit the placeholder value"),
            (" Ctrl+Y", "Copy while editing"),
        ],
    ),
    (
        "Search",
        &[
            (" /", "Search by name, command or description"),
            (" Enter", "Keep the search and return to the list"),
            (" Esc", "Clear the search"),
            (" C", "Clear the active search"),
        ],
    ),
    (
        "General",
        &[
            (" T", "Select theme"),
            (" ?", "Show this help"),
            (" q / Ctrl+C", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.modal);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;

        let mut rows = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, self.theme.category)),
                Cell::from(""),
            ]));
            rows.extend(bindings.iter().map(|(key, desc)| {
                Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ])
            }));
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}
