pub mod catalog;
pub mod clipboard;
pub mod filter;
pub mod models;
pub mod template;
