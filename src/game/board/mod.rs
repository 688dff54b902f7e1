use itertools::Itertools;

use crate::game::definition::{OptionFlag, QuizOption};
use crate::game::layout::GridDimensions;
use crate::game::session::{Phase, Session, Verdict};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellStyle {
    Plain,
    Correct,
    Penalty,
    Wrong,
}

impl From<&QuizOption> for CellStyle {
    fn from(option: &QuizOption) -> Self {
        if !option.revealed {
            return CellStyle::Plain;
        }
        match option.flag {
            OptionFlag::Correct => CellStyle::Correct,
            OptionFlag::Penalty => CellStyle::Penalty,
            OptionFlag::Neutral => CellStyle::Wrong,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub position: usize,
    pub text: String,
    pub enabled: bool,
    pub style: CellStyle,
}

/// Read-only snapshot of everything the renderer draws.
///
/// Visible options are laid out row-major and the last row is padded with
/// `None` so that every row has `grid.cols` slots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub question: String,
    pub penalty_remaining: i32,
    pub phase: Phase,
    pub grid: GridDimensions,
    pub rows: Vec<Vec<Option<Cell>>>,
    pub popup: Option<Verdict>,
}

impl Board {
    pub fn new(session: &Session, grid: GridDimensions, popup: Option<Verdict>) -> Self {
        let phase = session.get_phase();
        let cells: Vec<Option<Cell>> = session
            .visible_options()
            .enumerate()
            .map(|(slot, (_index, option))| {
                Some(Cell {
                    position: slot + 1,
                    text: option.text.clone(),
                    enabled: phase == Phase::Running && option.is_selectable(),
                    style: option.into(),
                })
            })
            .pad_using(grid.capacity(), |_| None)
            .collect();

        let rows = if cells.iter().any(Option::is_some) {
            cells
                .chunks(grid.cols)
                .map(|row| row.to_vec())
                .collect()
        } else {
            Vec::new()
        };

        Board {
            question: session.get_question().to_owned(),
            penalty_remaining: session.get_penalty_remaining(),
            phase,
            grid,
            rows,
            popup,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(Option::as_ref)
    }
}
