use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectionState {
    pub selected_index: usize,
    pub themes: Vec<PaletteType>,
}

impl ThemeSelectionState {
    /// Opens with the active palette highlighted.
    #[must_use]
    pub fn starting_at(current: PaletteType) -> Self {
        let themes = PaletteType::all().to_vec();
        let selected_index = themes.iter().position(|t| *t == current).unwrap_or(0);
        Self {
            selected_index,
            themes,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PaletteType> {
        self.themes.get(self.selected_index).copied()
    }
}

impl Default for ThemeSelectionState {
    fn default() -> Self {
        Self::starting_at(PaletteType::CatppuccinMocha)
    }
}
