use std::fmt;

/// Position of a template in the unfiltered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CommandId {
    pub category: usize,
    pub item: usize,
}

impl CommandId {
    #[must_use]
    pub const fn new(category: usize, item: usize) -> Self {
        Self { category, item }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.item)
    }
}
