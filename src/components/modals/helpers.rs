use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

/// Fades everything already drawn in `area` behind a modal.
pub fn dim_area(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

/// A `width` x `height` box centered in `area`, clamped to it.
pub fn centered(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let row = Layout::vertical([height]).flex(Flex::Center).split(area)[0];
    Layout::horizontal([width]).flex(Flex::Center).split(row)[0]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    centered(
        area,
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Percentage(percent_y.min(100)),
    )
}

/// One cell down and right of `area`, clipped to the screen.
pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        ..area
    }
    .intersection(terminal_area);
    Clear.render(shadow, buf);
    buf.set_style(shadow, Style::default().bg(Color::Black));
}
