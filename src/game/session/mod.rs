use std::convert::TryFrom;

use crate::game::definition::{QuizDefinition, QuizOption};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    NotLoaded,
    Loaded,
    Running,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::NotLoaded
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Correct,
    Penalty,
}

/// State of one quiz, from import until it is cleared.
///
/// Every mutation goes through one of the transitions below. A transition
/// that is not allowed in the current phase leaves the session untouched and
/// reports so through its return value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    question: String,
    options: Vec<QuizOption>,
    penalty_remaining: i32,
    phase: Phase,
    selected: Option<usize>,
}

impl Session {
    pub fn get_question(&self) -> &str {
        &self.question
    }

    #[cfg(test)]
    pub fn get_options(&self) -> &Vec<QuizOption> {
        &self.options
    }

    pub fn get_penalty_remaining(&self) -> i32 {
        self.penalty_remaining
    }

    pub fn get_phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn get_selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Options that get a cell on the board, paired with their index in the full list.
    pub fn visible_options(&self) -> impl Iterator<Item = (usize, &QuizOption)> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_index, option)| !option.is_blank())
    }

    pub fn num_visible_options(&self) -> usize {
        self.visible_options().count()
    }

    /// Maps a 1-based board position to the index of the option shown there.
    pub fn option_index_at(&self, position: usize) -> Option<usize> {
        if position == 0 {
            return None;
        }
        self.visible_options()
            .nth(position - 1)
            .map(|(index, _option)| index)
    }

    pub fn load(&mut self, definition: QuizDefinition) -> bool {
        if self.is_running() {
            return false;
        }
        let (question, options) = definition.into_parts();
        let num_penalties = options.iter().filter(|o| o.is_penalty()).count();
        self.penalty_remaining = i32::try_from(num_penalties).unwrap_or(i32::MAX);
        self.question = question;
        self.options = options;
        self.selected = None;
        self.phase = Phase::Loaded;
        true
    }

    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Loaded {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn end(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Loaded;
        self.selected = None;
        true
    }

    pub fn can_clear(&self) -> bool {
        !self.is_running()
    }

    pub fn select(&mut self, index: usize) -> Option<&QuizOption> {
        if !self.is_running() {
            return None;
        }
        match self.options.get(index) {
            Some(option) if option.is_selectable() => {
                self.selected = Some(index);
                Some(option)
            }
            _ => None,
        }
    }

    pub fn cancel_selection(&mut self) {
        self.selected = None;
    }

    pub fn confirm_selection(&mut self) -> Option<Verdict> {
        let index = self.selected.take()?;
        let option = self.options.get_mut(index)?;
        option.revealed = true;
        if option.is_correct {
            Some(Verdict::Correct)
        } else {
            self.penalty_remaining -= 1;
            Some(Verdict::Penalty)
        }
    }
}
