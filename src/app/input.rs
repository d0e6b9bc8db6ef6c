use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::catalog_view::{card_at, catalog_rows, CatalogRow};
use crate::domain::models::CommandId;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};
use std::time::{Duration, Instant};

const DOUBLE_CLICK: Duration = Duration::from_millis(500);

/// The card drawn at `clicked_line` of the list area, as (visible position, id).
pub fn resolve_clicked_row(
    app_state: &AppState<'_>,
    clicked_line: usize,
) -> Option<(usize, CommandId)> {
    let rows = catalog_rows(&app_state.visible());
    match card_at(&rows, app_state.list_state.offset(), clicked_line)? {
        CatalogRow::Card { position, view } => Some((*position, view.id)),
        CatalogRow::Header { .. } => None,
    }
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            map_key(key, app_state)
        }
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    match app_state.mode {
        AppMode::Search => match key.code {
            KeyCode::Esc => Some(Action::CancelSearch),
            KeyCode::Enter => Some(Action::ConfirmSearch),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Up => Some(Action::SelectPrev),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Edit => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleEdit(None)),
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::CopyCommand(None))
            }
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::ThemeSelection => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
            KeyCode::Enter => Some(Action::ConfirmThemeSelection),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
            _ => None,
        },
        AppMode::Normal => app_state.keymap.get_action(key),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    if matches!(app_state.mode, AppMode::Help | AppMode::ThemeSelection) {
        return None;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::SelectPrev),
        MouseEventKind::ScrollDown => Some(Action::SelectNext),
        MouseEventKind::Down(MouseButton::Left) => {
            if app_state.mode == AppMode::Edit {
                return None;
            }

            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area);
            let position = Position::new(mouse.column, mouse.row);

            if layout.search.contains(position) {
                return (app_state.mode != AppMode::Search).then_some(Action::EnterSearchMode);
            }

            let list = layout.list();
            if !list.contains(position) {
                return None;
            }

            let (index, id) =
                resolve_clicked_row(app_state, usize::from(mouse.row - list.y))?;
            let now = Instant::now();
            let is_double_click = app_state
                .last_click_time
                .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK)
                && app_state.last_click_pos == Some((mouse.column, mouse.row));

            if is_double_click {
                Some(Action::CopyCommand(Some(id)))
            } else {
                Some(Action::SelectIndex(index))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let mut release = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state, SIZE), None);
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let mut state = AppState::default();
        for mode in [AppMode::Normal, AppMode::Search, AppMode::Edit, AppMode::Help] {
            state.mode = mode;
            assert_eq!(
                map_event_to_action(ctrl_c.clone(), &state, SIZE),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_letters_type_in_input_modes() {
        let mut state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::Quit)
        );

        state.mode = AppMode::Search;
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::TextAreaInput(_))
        ));
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelSearch)
        );

        state.mode = AppMode::Edit;
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('y')), &state, SIZE),
            Some(Action::TextAreaInput(_))
        ));
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::ToggleEdit(None))
        );
        assert_eq!(
            map_event_to_action(
                Event::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)),
                &state,
                SIZE
            ),
            Some(Action::CopyCommand(None))
        );
    }

    #[test]
    fn test_click_selects_card_and_double_click_copies() {
        let mut state = AppState::default();
        let list = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height)).list();

        // First line of the list is the category header
        assert_eq!(map_event_to_action(click(10, list.y), &state, SIZE), None);

        // Second card spans list lines 4..=6
        assert_eq!(
            map_event_to_action(click(10, list.y + 5), &state, SIZE),
            Some(Action::SelectIndex(1))
        );

        state.last_click_time = Some(Instant::now());
        state.last_click_pos = Some((10, list.y + 5));
        assert_eq!(
            map_event_to_action(click(10, list.y + 5), &state, SIZE),
            Some(Action::CopyCommand(Some(CommandId::new(0, 1))))
        );
    }

    #[test]
    fn test_click_on_search_bar_focuses_it() {
        let state = AppState::default();
        let search = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height)).search;
        assert_eq!(
            map_event_to_action(click(5, search.y + 1), &state, SIZE),
            Some(Action::EnterSearchMode)
        );
    }

    #[test]
    fn test_click_uses_filtered_rows() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SetSearchTerm("rebase".to_string()));
        let list = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height)).list();
        assert_eq!(
            resolve_clicked_row(&state, 4),
            Some((1, CommandId::new(3, 1)))
        );
        assert_eq!(
            map_event_to_action(click(3, list.y + 1), &state, SIZE),
            Some(Action::SelectIndex(0))
        );
    }

    #[test]
    fn test_mouse_ignored_under_modals() {
        let mut state = AppState::default();
        state.mode = AppMode::Help;
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event_to_action(scroll, &state, SIZE), None);
    }
}
