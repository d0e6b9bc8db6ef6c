use super::keymap::{KeyConfig, KeyMap};
use crate::domain::catalog::{Catalog, CommandTemplate};
use crate::domain::filter::{filter_catalog, visible_ids, CategoryView};
use crate::domain::models::CommandId;
use crate::domain::template;
use ratatui::widgets::ListState;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

pub mod input;
pub mod theme;

// Re-exports
pub use input::{AppTextArea, InputState, InputTarget};
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Browsing the catalog
    Search,         // Typing in the search bar
    Edit,           // Typing a substitution value for one command
    Help,           // Showing the help overlay
    ThemeSelection, // Choosing a UI theme
}

/// Per-session user state. Nothing here outlives the process.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub search_term: String,
    pub editable_values: HashMap<CommandId, String>,
    pub editing: Option<CommandId>,
    pub copied: Option<CommandId>,
    /// Bumped on every successful copy; identifies the reset that may clear `copied`.
    pub copy_generation: u64,
}

impl UiState {
    #[must_use]
    pub fn value_for(&self, id: CommandId) -> Option<&str> {
        self.editable_values.get(&id).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub status_message: Option<String>, // "Copied: git status"
    pub status_clear_time: Option<Instant>,

    // --- Data ---
    pub catalog: Catalog,
    pub ui: UiState,

    // --- Selection & Scroll ---
    pub selected: Option<CommandId>,
    pub list_state: ListState,

    // --- Input Handling ---
    pub input: Option<InputState<'a>>,

    // --- Click Tracking ---
    pub last_click_time: Option<Instant>,
    pub last_click_pos: Option<(u16, u16)>,

    // --- Theme Selection ---
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &KeyConfig, palette_type: crate::theme::PaletteType) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(config)),
            palette_type,
            theme: crate::theme::Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<CategoryView> {
        filter_catalog(&self.catalog, &self.ui.search_term)
    }

    #[must_use]
    pub fn visible_ids(&self) -> Vec<CommandId> {
        visible_ids(&self.visible())
    }

    /// Position of the selection in the visible list.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.visible_ids().iter().position(|id| *id == selected)
    }

    #[must_use]
    pub fn template(&self, id: CommandId) -> Option<&'static CommandTemplate> {
        self.catalog.get(id)
    }

    /// Fully substituted text for `id`, as it would be copied.
    #[must_use]
    pub fn copy_text(&self, id: CommandId) -> Option<String> {
        let template = self.template(id)?;
        Some(template::render(template.command, self.ui.value_for(id)).into_owned())
    }

    pub fn set_search_term(&mut self, term: String) {
        if term != self.ui.search_term {
            tracing::debug!(term = %term, "search term changed");
        }
        self.ui.search_term = term;
        self.ensure_selection_visible();
    }

    /// Keeps the selected command if it still matches, otherwise moves to the first visible one.
    pub fn ensure_selection_visible(&mut self) {
        let ids = self.visible_ids();
        if !self.selected.is_some_and(|id| ids.contains(&id)) {
            self.selected = ids.first().copied();
            self.list_state = ListState::default();
        }
    }

    pub fn set_status(&mut self, message: String, ttl: std::time::Duration) {
        self.status_message = Some(message);
        self.status_clear_time = Some(Instant::now() + ttl);
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let catalog = Catalog::builtin();
        let selected = catalog.ids().next();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            status_message: None,
            status_clear_time: None,
            selected,
            catalog,
            ui: UiState::default(),
            list_state: ListState::default(),
            input: None,
            last_click_time: None,
            last_click_pos: None,
            theme_selection: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
