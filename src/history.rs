use crate::models::CreativeIdea;
use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 3;

/// Recently displaced ideas, newest first. Only the last `HISTORY_LIMIT` survive.
#[derive(Debug, Default, Clone)]
pub struct IdeaHistory {
    entries: VecDeque<CreativeIdea>,
}

impl IdeaHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_LIMIT + 1),
        }
    }

    pub fn push(&mut self, idea: CreativeIdea) {
        self.entries.push_front(idea);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreativeIdea> {
        self.entries.iter()
    }
}
