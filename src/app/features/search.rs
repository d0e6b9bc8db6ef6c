use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, AppTextArea, InputState, InputTarget},
};

pub const SEARCH_PLACEHOLDER: &str = "Search commands...";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterSearchMode => {
            state.mode = AppMode::Search;
            state.input = Some(InputState {
                target: InputTarget::Search,
                text_area: AppTextArea::with_text(&state.ui.search_term, SEARCH_PLACEHOLDER),
            });
        }
        Action::ConfirmSearch => {
            if state.mode != AppMode::Search {
                return UpdateResult::NotHandled;
            }
            close_search(state);
        }
        Action::CancelSearch => {
            close_search(state);
            state.set_search_term(String::new());
        }
        Action::ClearSearch => state.set_search_term(String::new()),
        Action::SetSearchTerm(term) => state.set_search_term(term.clone()),
        Action::TextAreaInput(key) if state.mode == AppMode::Search => {
            let term = match &mut state.input {
                Some(input) if input.target == InputTarget::Search => {
                    input.text_area.input(*key);
                    input.text_area.text()
                }
                _ => return UpdateResult::NotHandled,
            };
            state.set_search_term(term);
        }
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn close_search(state: &mut AppState) {
    if state.mode == AppMode::Search {
        state.mode = AppMode::Normal;
        state.input = None;
    }
}
