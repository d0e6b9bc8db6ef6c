use crate::app::state::{AppMode, AppState, InputTarget};
use crate::components::{
    catalog_view::{catalog_rows, CatalogView},
    footer::Footer,
    header::Header,
    modals::{helpers::dim_area, HelpModal, ThemeSelectionModal},
    search_bar::SearchBar,
};
use crate::domain::filter::visible_ids;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Area of the list inside the body border.
    #[must_use]
    pub fn list(&self) -> Rect {
        self.body.inner(ratatui::layout::Margin::new(1, 1))
    }
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Catalog
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        search: main[1],
        body: main[2],
        footer: main[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let views = app_state.visible();
    let rows = catalog_rows(&views);

    // --- Header ---
    f.render_widget(
        Header {
            theme: &app_state.theme,
            visible: visible_ids(&views).len(),
            total: app_state.catalog.len(),
            search_term: &app_state.ui.search_term,
        },
        layout.header,
    );

    // --- Search ---
    let search_input = app_state
        .input
        .as_ref()
        .filter(|input| input.target == InputTarget::Search)
        .map(|input| &input.text_area);
    f.render_widget(
        SearchBar {
            theme: &app_state.theme,
            term: &app_state.ui.search_term,
            input: search_input,
        },
        layout.search,
    );

    // --- Catalog ---
    let focused = matches!(app_state.mode, AppMode::Normal | AppMode::Edit);
    let (border, title_style) = if focused {
        (app_state.theme.border_focus, app_state.theme.header_active)
    } else {
        (app_state.theme.border, app_state.theme.header_stats)
    };
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("COMMANDS", title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    f.render_widget(block, layout.body);

    let cursor_col = app_state
        .input
        .as_ref()
        .filter(|input| matches!(input.target, InputTarget::Substitution(_)))
        .map(|input| input.text_area.cursor().1);
    let catalog = CatalogView {
        rows: &rows,
        ui: &app_state.ui,
        selected: app_state.selected,
        cursor_col,
        theme: &app_state.theme,
        frame_count: app_state.frame_count,
    };
    f.render_stateful_widget(catalog, layout.list(), &mut app_state.list_state);

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &app_state.theme,
        },
        layout.footer,
    );

    // --- Modals ---
    let area = f.area();
    match app_state.mode {
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(
                HelpModal {
                    theme: &app_state.theme,
                },
                area,
            );
        }
        AppMode::ThemeSelection => {
            if let Some(selection) = &app_state.theme_selection {
                dim_area(f.buffer_mut(), area);
                f.render_widget(
                    ThemeSelectionModal {
                        theme: &app_state.theme,
                        state: selection,
                        current: app_state.palette_type,
                    },
                    area,
                );
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer;
    use crate::domain::models::CommandId;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_reserves_fixed_rows() {
        let layout = get_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.body.height, 25);
        assert_eq!(layout.list(), Rect::new(1, 5, 78, 23));
    }

    #[test]
    fn test_renders_title_and_first_category() {
        let mut state = AppState::default();
        let screen = render(&mut state, 100, 30);
        assert!(screen.contains("GIT BUDDY"));
        assert!(screen.contains("26 commands"));
        assert!(screen.contains("Basic Commands"));
        assert!(screen.contains("Initialize Repository"));
        assert!(screen.contains("$ git init"));
    }

    #[test]
    fn test_renders_filtered_view() {
        let mut state = AppState::default();
        state.set_search_term("cherry".to_string());
        let screen = render(&mut state, 100, 30);
        assert!(screen.contains("1 of 26 commands"));
        assert!(screen.contains("Advanced Operations"));
        assert!(screen.contains("git cherry-pick <commit-hash>"));
        assert!(!screen.contains("Basic Commands"));
    }

    #[test]
    fn test_renders_empty_result() {
        let mut state = AppState::default();
        state.set_search_term("no such command".to_string());
        let screen = render(&mut state, 100, 30);
        assert!(screen.contains("No commands match your search"));
    }

    #[test]
    fn test_renders_substituted_and_copied_card() {
        let id = CommandId::new(0, 3);
        let mut state = AppState::default();
        state.ui.editable_values.insert(id, "hi".to_string());
        state.ui.copied = Some(id);
        let screen = render(&mut state, 100, 40);
        assert!(screen.contains("git commit -m \"hi\""));
        assert!(screen.contains("Copied"));
    }

    #[test]
    fn test_renders_edit_view_with_hint() {
        let id = CommandId::new(0, 3);
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleEdit(Some(id)));
        let screen = render(&mut state, 100, 40);
        // Empty input shows the placeholder label between prefix and suffix
        assert!(screen.contains("git commit -m \""));
        assert!(screen.contains("commit message\""));
        assert!(screen.contains("Ctrl+Y"));
    }

    #[test]
    fn test_renders_modals() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleHelp);
        assert!(render(&mut state, 100, 40).contains("HELP - KEYBINDINGS"));

        reducer::update(&mut state, Action::ToggleHelp);
        reducer::update(&mut state, Action::EnterThemeSelection);
        let screen = render(&mut state, 100, 40);
        assert!(screen.contains("SELECT THEME"));
        assert!(screen.contains("Gruvbox"));
    }

    #[test]
    fn test_draw_never_panics_on_small_sizes() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::ToggleEdit(Some(CommandId::new(1, 1))));
        for width in 0..40 {
            for height in 0..20 {
                render(&mut state, width, height);
            }
        }
    }
}
