pub mod actions;
pub mod handler;

pub use actions::{update, COPIED_INDICATOR_DURATION};
pub use handler::CommandRuntime;
