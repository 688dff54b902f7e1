use parking_lot::RwLock;
use std::sync::Arc;

use crate::game::board::Board;
use crate::output::{GameOutput, Message};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Board(Board),
}

#[derive(Clone, Default)]
pub struct MockGameOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message.clone()),
                Entry::Board(_) => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages().iter().any(|m| m == message)
    }

    pub fn last_board(&self) -> Option<Board> {
        self.entries
            .read()
            .iter()
            .rev()
            .find_map(|entry| match entry {
                Entry::Board(board) => Some(board.clone()),
                Entry::Text(_) => None,
            })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) {
        self.entries.write().push(Entry::Text(message.clone()));
    }

    fn render(&self, board: &Board) {
        self.entries.write().push(Entry::Board(board.clone()));
    }
}
