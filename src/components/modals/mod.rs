pub mod help;
pub mod helpers;
pub mod theme_selection;

pub use help::HelpModal;
pub use theme_selection::ThemeSelectionModal;
