mod groups;
mod types;

use crate::app::state::AppState;
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Bottom bar: the transient status message, then as many key hints as fit.
pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn item_spans(&self, item: &FooterItem) -> [Span<'static>; 3] {
        let theme = self.theme;
        let (key_style, desc_style) = if item.highlighted {
            (
                theme.header_active,
                theme.header_active.add_modifier(Modifier::DIM),
            )
        } else {
            (theme.footer_segment_key, theme.footer_segment_val)
        };
        [
            Span::styled(format!(" {} ", item.key), key_style),
            Span::styled(format!(" {} ", item.desc), desc_style),
            Span::raw(" "),
        ]
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let budget = usize::from(area.width.saturating_sub(4));
        let mut spans = Vec::new();

        if let Some(msg) = &self.state.status_message {
            spans.push(Span::styled(format!("  {msg}  "), self.theme.status_info));
            spans.push(Span::raw(" "));
        }
        let mut used: usize = spans.iter().map(Span::width).sum();

        'groups: for group in groups::get_groups(self.state) {
            for item in &group.items {
                let item_spans = self.item_spans(item);
                let width: usize = item_spans.iter().map(Span::width).sum();
                if used + width > budget {
                    break 'groups;
                }
                used += width;
                spans.extend(item_spans);
            }
            spans.push(Span::raw("  "));
            used += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
