use std::path::PathBuf;

use crate::game::board::Board;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    CommandError(String),
    ConfirmClear,
    ConfirmSelection(String),
    CsvFormat,
    DialogPending,
    Help,
    ImportFailed(String),
    QuizLibrary(PathBuf, Vec<String>),
}

pub trait GameOutput {
    fn say(&self, message: &Message);

    fn render(&self, board: &Board);
}
