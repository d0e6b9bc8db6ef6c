use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => move_selection(state, 1),
        Action::SelectPrev => move_selection(state, -1),
        Action::SelectFirst => select_index(state, 0),
        Action::SelectLast => {
            let last = state.visible_ids().len().saturating_sub(1);
            select_index(state, last);
        }
        Action::SelectIndex(idx) => select_index(state, *idx),
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn move_selection(state: &mut AppState, delta: isize) {
    let ids = state.visible_ids();
    let current = state.selected_index();
    if let Some(new_index) = calculate_new_index(current, delta, ids.len()) {
        state.selected = Some(ids[new_index]);
    }
}

fn select_index(state: &mut AppState, idx: usize) {
    if let Some(id) = state.visible_ids().get(idx) {
        state.selected = Some(*id);
    }
}

fn calculate_new_index(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    })
}
