use crate::app::state::UiState;
use crate::domain::filter::{CategoryView, CommandView};
use crate::domain::models::CommandId;
use crate::domain::template::{self, Segment};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

pub const HEADER_HEIGHT: u16 = 1;
pub const CARD_HEIGHT: u16 = 3;

/// One entry of the rendered list: a category heading or a command card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogRow {
    Header { name: &'static str, count: usize },
    /// `position` is the card's index in the visible (filtered) list.
    Card { position: usize, view: CommandView },
}

impl CatalogRow {
    #[must_use]
    pub fn height(&self) -> u16 {
        match self {
            CatalogRow::Header { .. } => HEADER_HEIGHT,
            CatalogRow::Card { .. } => CARD_HEIGHT,
        }
    }
}

#[must_use]
pub fn catalog_rows(views: &[CategoryView]) -> Vec<CatalogRow> {
    let mut rows = Vec::new();
    let mut position = 0;
    for category in views {
        rows.push(CatalogRow::Header {
            name: category.name,
            count: category.items.len(),
        });
        for view in &category.items {
            rows.push(CatalogRow::Card {
                position,
                view: *view,
            });
            position += 1;
        }
    }
    rows
}

/// List row holding the card for `id`.
#[must_use]
pub fn row_of(rows: &[CatalogRow], id: CommandId) -> Option<usize> {
    rows.iter()
        .position(|row| matches!(row, CatalogRow::Card { view, .. } if view.id == id))
}

/// Maps a line inside the list area to the card drawn there, counting from `offset`.
#[must_use]
pub fn card_at(rows: &[CatalogRow], offset: usize, clicked_line: usize) -> Option<&CatalogRow> {
    let mut current_y = 0;
    for row in rows.iter().skip(offset) {
        let height = row.height() as usize;
        if clicked_line < current_y + height {
            return matches!(row, CatalogRow::Card { .. }).then_some(row);
        }
        current_y += height;
    }
    None
}

pub struct CatalogView<'a> {
    pub rows: &'a [CatalogRow],
    pub ui: &'a UiState,
    pub selected: Option<CommandId>,
    /// Cursor column (in chars) of the substitution input, if one is open.
    pub cursor_col: Option<usize>,
    pub theme: &'a Theme,
    pub frame_count: u64,
}

impl CatalogView<'_> {
    fn header_item(&self, name: &str, count: usize) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(format!(" {name} "), self.theme.category),
            Span::styled(format!("({count})"), self.theme.category_count),
        ]))
    }

    fn card_item(&self, view: &CommandView) -> ListItem<'static> {
        let template = view.template;
        let theme = self.theme;

        let mut title = vec![Span::styled(format!("   {}", template.name), theme.card_name)];
        if template.editable {
            title.push(Span::styled(format!(" {}", glyphs::EDIT), theme.edit_marker));
        }
        if self.ui.copied == Some(view.id) {
            title.push(Span::styled(
                format!(" {} Copied", glyphs::COPIED),
                theme.copied_marker,
            ));
        }

        let description = Line::from(Span::styled(
            format!("   {}", template.description),
            theme.card_description,
        ));

        let mut command = vec![Span::styled(
            format!("   {} ", glyphs::PROMPT),
            theme.command_prompt,
        )];
        let value = self.ui.value_for(view.id);
        if self.ui.editing == Some(view.id) {
            command.extend(self.edit_spans(template.command, value, template.placeholder));
        } else if value.is_some_and(|v| !v.is_empty()) {
            command.push(Span::styled(
                template::render(template.command, value).into_owned(),
                theme.command_text,
            ));
        } else {
            command.extend(template::segments(template.command).into_iter().map(
                |segment| match segment {
                    Segment::Text(text) => Span::styled(text.to_string(), theme.command_text),
                    Segment::Token(token) => Span::styled(token.to_string(), theme.command_token),
                },
            ));
        }

        ListItem::new(Text::from(vec![
            Line::from(title),
            description,
            Line::from(command),
        ]))
    }

    fn edit_spans(
        &self,
        command: &str,
        value: Option<&str>,
        placeholder: Option<&str>,
    ) -> Vec<Span<'static>> {
        let theme = self.theme;
        let view = template::edit_view(command, value);
        let cursor_visible = self.frame_count % 4 < 2;
        let cursor = Span::styled(
            if cursor_visible { glyphs::CURSOR } else { " " },
            theme.edit_value,
        );

        let mut spans = vec![Span::styled(view.prefix.to_string(), theme.command_text)];
        if view.value.is_empty() {
            spans.push(cursor);
            spans.push(Span::styled(
                placeholder.unwrap_or_default().to_string(),
                theme.edit_hint,
            ));
        } else {
            let col = self
                .cursor_col
                .unwrap_or(usize::MAX)
                .min(view.value.chars().count());
            let split = view
                .value
                .char_indices()
                .nth(col)
                .map_or(view.value.len(), |(i, _)| i);
            let (before, after) = view.value.split_at(split);
            spans.push(Span::styled(before.to_string(), theme.edit_value));
            spans.push(cursor);
            spans.push(Span::styled(after.to_string(), theme.edit_value));
        }
        spans.push(Span::styled(view.suffix.to_string(), theme.command_text));

        let tokens = template::placeholders(command);
        if tokens.len() > 1 {
            spans.push(Span::styled(
                format!("  fills {}", tokens.join(", ")),
                theme.edit_hint,
            ));
        }
        spans
    }
}

impl StatefulWidget for CatalogView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        if self.rows.is_empty() {
            Paragraph::new("No commands match your search")
                .style(self.theme.dimmed)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| match row {
                CatalogRow::Header { name, count } => self.header_item(name, *count),
                CatalogRow::Card { view, .. } => self.card_item(view),
            })
            .collect();

        state.select(self.selected.and_then(|id| row_of(self.rows, id)));

        let list = List::new(items)
            .style(self.theme.list_item)
            .highlight_style(self.theme.card_selected)
            .scroll_padding(1);
        StatefulWidget::render(list, area, buf, state);
    }
}
