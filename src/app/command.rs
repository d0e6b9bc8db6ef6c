use crate::domain::models::CommandId;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CopyToClipboard {
        id: CommandId,
        text: String,
    },
    ScheduleCopiedReset {
        id: CommandId,
        generation: u64,
        after: Duration,
    },
}
