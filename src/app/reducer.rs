use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use std::time::Instant;

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: &[FeatureUpdate] = &[
    features::navigation::update,
    features::search::update,
    features::edit::update,
    features::clipboard::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Quit => {
            state.should_quit = true;
            None
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            None
        }
        Action::Resize(_, _) => {
            // Layout is recomputed on the next draw
            None
        }
        action => {
            for feature in FEATURES {
                if let UpdateResult::Handled(command) = feature(state, &action) {
                    return command;
                }
            }
            tracing::trace!(?action, "unhandled action");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppMode;
    use crate::domain::models::CommandId;
    use std::time::Duration;

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::default();
        assert!(update(&mut state, Action::Quit).is_none());
        assert!(state.should_quit);
    }

    #[test]
    fn test_tick_clears_expired_status() {
        let mut state = AppState::default();
        state.set_status("Copied: git status".to_string(), Duration::ZERO);
        update(&mut state, Action::Tick);
        assert_eq!(state.status_message, None);
        assert_eq!(state.frame_count, 1);

        state.set_status("still here".to_string(), Duration::from_secs(60));
        update(&mut state, Action::Tick);
        assert_eq!(state.status_message.as_deref(), Some("still here"));
    }

    #[test]
    fn test_copy_flow_through_reducer() {
        let id = CommandId::new(1, 1);
        let mut state = AppState::default();

        update(&mut state, Action::ToggleEdit(Some(id)));
        assert_eq!(state.mode, AppMode::Edit);
        update(&mut state, Action::SetSearchTerm("branch".to_string()));
        state.ui.editable_values.insert(id, "topic".to_string());

        let cmd = update(&mut state, Action::CopyCommand(None));
        assert_eq!(
            cmd,
            Some(Command::CopyToClipboard {
                id,
                text: "git branch topic".to_string(),
            })
        );

        let cmd = update(&mut state, Action::CopySucceeded(id, "git branch topic".into()));
        assert!(matches!(
            cmd,
            Some(Command::ScheduleCopiedReset { generation: 1, .. })
        ));
        assert_eq!(state.ui.copied, Some(id));

        update(&mut state, Action::CopyExpired(id, 1));
        assert_eq!(state.ui.copied, None);
    }

    #[test]
    fn test_text_input_routes_by_mode() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let mut state = AppState::default();

        update(&mut state, Action::EnterSearchMode);
        update(&mut state, Action::TextAreaInput(key));
        assert_eq!(state.ui.search_term, "x");
        update(&mut state, Action::ConfirmSearch);

        update(&mut state, Action::ClearSearch);
        let id = CommandId::new(1, 1);
        update(&mut state, Action::ToggleEdit(Some(id)));
        update(&mut state, Action::TextAreaInput(key));
        assert_eq!(state.ui.value_for(id), Some("x"));
        assert_eq!(state.ui.search_term, "");

        // No focused input: dropped
        update(&mut state, Action::CancelMode);
        assert_eq!(update(&mut state, Action::TextAreaInput(key)), None);
        assert_eq!(state.ui.value_for(id), Some("x"));
    }
}
