use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, AppTextArea, InputState, InputTarget},
};
use crate::domain::models::CommandId;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleEdit(target) => {
            let target = target.or(if state.mode == AppMode::Edit {
                state.ui.editing
            } else {
                state.selected
            });
            if let Some(id) = target {
                toggle_edit(state, id);
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) if state.mode == AppMode::Edit => {
            if let Some(InputState {
                target: InputTarget::Substitution(id),
                text_area,
            }) = &mut state.input
            {
                text_area.input(*key);
                state.ui.editable_values.insert(*id, text_area.text());
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Opens the substitution input for `id`, or closes it when `id` is already being edited.
/// The stored value is left untouched either way.
fn toggle_edit(state: &mut AppState, id: CommandId) {
    if state.ui.editing == Some(id) {
        state.ui.editing = None;
        if state.mode == AppMode::Edit {
            state.mode = AppMode::Normal;
        }
        state.input = None;
        return;
    }

    let Some(template) = state.template(id).filter(|t| t.editable) else {
        tracing::debug!(%id, "edit requested for a fixed command");
        return;
    };

    state.ui.editing = Some(id);
    state.selected = Some(id);
    state.mode = AppMode::Edit;
    state.input = Some(InputState {
        target: InputTarget::Substitution(id),
        text_area: AppTextArea::with_text(
            state.ui.value_for(id).unwrap_or_default(),
            template.placeholder.unwrap_or_default(),
        ),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    const CREATE_BRANCH: CommandId = CommandId::new(1, 1);
    const GIT_INIT: CommandId = CommandId::new(0, 0);

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            update(state, &Action::TextAreaInput(key));
        }
    }

    #[test]
    fn test_toggle_twice_restores_state_and_keeps_value() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleEdit(Some(CREATE_BRANCH)));
        assert_eq!(state.mode, AppMode::Edit);
        assert_eq!(state.ui.editing, Some(CREATE_BRANCH));

        type_str(&mut state, "foo");
        assert_eq!(state.ui.value_for(CREATE_BRANCH), Some("foo"));

        update(&mut state, &Action::ToggleEdit(Some(CREATE_BRANCH)));
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.ui.editing, None);
        assert!(state.input.is_none());
        assert_eq!(state.ui.value_for(CREATE_BRANCH), Some("foo"));
        assert_eq!(state.copy_text(CREATE_BRANCH).unwrap(), "git branch foo");
    }

    #[test]
    fn test_pure_flip_without_typing() {
        let mut state = AppState::default();
        let before = state.ui.clone();
        update(&mut state, &Action::ToggleEdit(Some(CREATE_BRANCH)));
        update(&mut state, &Action::ToggleEdit(Some(CREATE_BRANCH)));
        assert_eq!(state.ui, before);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_reopening_seeds_stored_value() {
        let mut state = AppState::default();
        state
            .ui
            .editable_values
            .insert(CREATE_BRANCH, "feature".to_string());
        update(&mut state, &Action::ToggleEdit(Some(CREATE_BRANCH)));
        type_str(&mut state, "-x");
        assert_eq!(state.ui.value_for(CREATE_BRANCH), Some("feature-x"));
    }

    #[test]
    fn test_fixed_commands_cannot_be_edited() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleEdit(Some(GIT_INIT)));
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.ui.editing, None);
        type_str(&mut state, "oops");
        assert!(state.ui.editable_values.is_empty());
    }

    #[test]
    fn test_toggle_without_target_uses_selection_then_editing() {
        let mut state = AppState::default();
        state.selected = Some(CREATE_BRANCH);
        update(&mut state, &Action::ToggleEdit(None));
        assert_eq!(state.ui.editing, Some(CREATE_BRANCH));
        update(&mut state, &Action::ToggleEdit(None));
        assert_eq!(state.ui.editing, None);
    }

    #[test]
    fn test_switching_edit_target() {
        let other = CommandId::new(1, 2);
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleEdit(Some(CREATE_BRANCH)));
        type_str(&mut state, "a");
        update(&mut state, &Action::ToggleEdit(Some(other)));
        assert_eq!(state.ui.editing, Some(other));
        type_str(&mut state, "b");
        assert_eq!(state.ui.value_for(CREATE_BRANCH), Some("a"));
        assert_eq!(state.ui.value_for(other), Some("b"));
    }
}
