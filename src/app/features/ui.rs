use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ThemeSelectionState},
};
use crate::theme::{PaletteType, Theme};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.input = None;
            state.ui.editing = None;
            state.theme_selection = None;
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = (ts.selected_index + 1) % ts.themes.len();
            }
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                if ts.selected_index == 0 {
                    ts.selected_index = ts.themes.len() - 1;
                } else {
                    ts.selected_index -= 1;
                }
            }
        }
        Action::ConfirmThemeSelection => {
            let Some(palette) = state.theme_selection.as_ref().and_then(|ts| ts.selected()) else {
                return UpdateResult::NotHandled;
            };
            apply_theme(state, palette);
        }
        Action::SwitchTheme(palette) => apply_theme(state, *palette),
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn apply_theme(state: &mut AppState, palette: PaletteType) {
    tracing::debug!(theme = palette.label(), "theme switched");
    state.palette_type = palette;
    state.theme = Theme::from_palette_type(palette);
    state.theme_selection = None;
    state.mode = AppMode::Normal;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_toggles() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_theme_selection_starts_at_current_and_wraps() {
        let mut state = AppState::default();
        state.palette_type = PaletteType::Nord;
        update(&mut state, &Action::EnterThemeSelection);
        assert_eq!(state.mode, AppMode::ThemeSelection);
        assert_eq!(
            state.theme_selection.as_ref().unwrap().selected(),
            Some(PaletteType::Nord)
        );

        update(&mut state, &Action::SelectThemeNext);
        update(&mut state, &Action::SelectThemeNext);
        assert_eq!(
            state.theme_selection.as_ref().unwrap().selected(),
            Some(PaletteType::CatppuccinMocha)
        );
        update(&mut state, &Action::SelectThemePrev);
        assert_eq!(
            state.theme_selection.as_ref().unwrap().selected(),
            Some(PaletteType::Gruvbox)
        );

        update(&mut state, &Action::ConfirmThemeSelection);
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.palette_type, PaletteType::Gruvbox);
        assert_eq!(state.theme, Theme::from_palette_type(PaletteType::Gruvbox));
        assert!(state.theme_selection.is_none());
    }

    #[test]
    fn test_switch_theme_applies_directly() {
        let mut state = AppState::default();
        update(&mut state, &Action::EnterThemeSelection);
        update(&mut state, &Action::SwitchTheme(PaletteType::Nord));
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.palette_type, PaletteType::Nord);
        assert_eq!(state.theme, Theme::from_palette_type(PaletteType::Nord));
        assert!(state.theme_selection.is_none());
    }

    #[test]
    fn test_confirm_without_selection_is_not_handled() {
        let mut state = AppState::default();
        assert!(matches!(
            update(&mut state, &Action::ConfirmThemeSelection),
            UpdateResult::NotHandled
        ));
    }

    #[test]
    fn test_cancel_mode_closes_everything() {
        let mut state = AppState::default();
        update(&mut state, &Action::EnterThemeSelection);
        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.theme_selection.is_none());
        assert_eq!(state.palette_type, PaletteType::CatppuccinMocha);
    }
}
