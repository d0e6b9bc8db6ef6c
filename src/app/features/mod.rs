pub mod clipboard;
pub mod edit;
pub mod navigation;
pub mod search;
pub mod ui;
