pub const LOGO: &str = "";
pub const PROMPT: &str = "$";
pub const EDIT: &str = "✎";
pub const COPIED: &str = "✓";
pub const CURSOR: &str = "▏";
pub const SEARCH: &str = "";
pub const SEP_RIGHT: &str = "";
pub const SWATCH: &str = "██";
pub const POINTER: &str = "▸";
