use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState},
};
use std::time::Duration;

/// How long a card shows the copied check mark.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(2000);
const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CopyCommand(target) => {
            let target = target.or(if state.mode == AppMode::Edit {
                state.ui.editing
            } else {
                state.selected
            });
            let command = target.and_then(|id| {
                let text = state.copy_text(id)?;
                Some(Command::CopyToClipboard { id, text })
            });
            UpdateResult::Handled(command)
        }
        Action::CopySucceeded(id, text) => {
            state.ui.copied = Some(*id);
            state.ui.copy_generation += 1;
            state.set_status(format!("Copied: {text}"), STATUS_TTL);
            UpdateResult::Handled(Some(Command::ScheduleCopiedReset {
                id: *id,
                generation: state.ui.copy_generation,
                after: COPIED_INDICATOR_DURATION,
            }))
        }
        Action::CopyExpired(id, generation) => {
            if *generation == state.ui.copy_generation && state.ui.copied == Some(*id) {
                state.ui.copied = None;
            } else {
                tracing::debug!(%id, generation, "stale copied reset ignored");
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
