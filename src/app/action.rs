use crate::app::command::Command;
use crate::domain::models::CommandId;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation (Catalog) ---
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    SelectIndex(usize), // Position in the visible (filtered) list

    // --- Search ---
    EnterSearchMode,   // Focus the search bar (/)
    ConfirmSearch,     // Enter: keep the term, back to the list
    CancelSearch,      // Esc: clear the term, back to the list
    ClearSearch,       // Clear the term from the list view
    SetSearchTerm(String),

    // --- Substitution ---
    ToggleEdit(Option<CommandId>), // None targets the selected card

    // --- Clipboard ---
    CopyCommand(Option<CommandId>), // None targets the editing or selected card

    // --- UI Mode Transitions ---
    TextAreaInput(crossterm::event::KeyEvent), // Routed to the focused input
    ToggleHelp,
    EnterThemeSelection,
    SelectThemeNext,
    SelectThemePrev,
    ConfirmThemeSelection,
    SwitchTheme(crate::theme::PaletteType),
    CancelMode,

    // --- Async Results ---
    CopySucceeded(CommandId, String), // Clipboard accepted the text
    CopyExpired(CommandId, u64),      // Copied indicator timer fired (id, generation)
}
