use parking_lot::Mutex;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::game::board::{Board, Cell, CellStyle};
use crate::game::session::{Phase, Verdict};
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

const TITLE: &'static str = "DOBON QUIZ";
const MIN_CELL_WIDTH: usize = 8;

pub const CSV_FORMAT: &'static str = "CSV format (no header row):\n  row 1     : \"question\"\n  row 2..n  : \"option\", \"dobon flag\"\n  flag 0 marks the correct answer, flag 1 marks a dobon option";

pub const HELP: &'static str = "Commands:\n  import <path>  load a quiz from a CSV file\n  start          start the game\n  end            end the game\n  open <n>       open the option numbered n\n  yes / no       answer the pending question\n  clear          go back to before the CSV import\n  show           draw the board again\n  list           list CSV files in the quiz library\n  format         describe the CSV format\n  help           show this message\n  quit           exit";

/// Line-based renderer writing to any `Write` sink, stdout in practice.
pub struct TerminalOutput<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(sink: W) -> Self {
        TerminalOutput {
            sink: Mutex::new(sink),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    fn write(&self, text: &str) {
        let mut sink = self.sink.lock();
        if let Err(e) = writeln!(sink, "{}", text).and_then(|_| sink.flush()) {
            log::warn!("Could not write to terminal: {}", e);
        }
    }
}

fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        CommandError(error) => format!("⚠ {}", error),
        ConfirmClear => "Go back to before the CSV import? (yes/no)".into(),
        ConfirmSelection(text) => format!("Open \"{}\"? (yes/no)", text),
        CsvFormat => CSV_FORMAT.into(),
        DialogPending => "Answer the pending question with yes or no first.".into(),
        Help => HELP.into(),
        ImportFailed(reason) => format!("⚠ Could not import quiz: {}", reason),
        QuizLibrary(dir, files) => {
            if files.is_empty() {
                format!("No quiz files in {}", dir.display())
            } else {
                let mut listing = format!("Quiz files in {}:", dir.display());
                for file in files {
                    listing += &format!("\n  {}", file);
                }
                listing
            }
        }
    }
}

fn cell_label(cell: &Cell) -> String {
    let marker = match cell.style {
        CellStyle::Plain => "",
        CellStyle::Correct => "✔ ",
        CellStyle::Penalty => "✖ ",
        CellStyle::Wrong => "· ",
    };
    format!("{}. {}{}", cell.position, marker, cell.text)
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn render_grid(board: &Board) -> Vec<String> {
    let cell_width = board
        .cells()
        .map(|cell| UnicodeWidthStr::width(cell_label(cell).as_str()))
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH);

    board
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| match slot {
                    Some(cell) if cell.enabled => format!("[ {} ]", pad(&cell_label(cell), cell_width)),
                    Some(cell) => format!("( {} )", pad(&cell_label(cell), cell_width)),
                    None => " ".repeat(cell_width + 4),
                })
                .collect::<Vec<String>>()
                .join(" ")
                .trim_end()
                .to_owned()
        })
        .collect()
}

pub fn render_board(board: &Board) -> String {
    let mut lines = vec![format!("=== {} ===", TITLE)];

    if board.phase == Phase::NotLoaded {
        lines.push("No quiz loaded. Use `import <path>` to load a CSV file.".into());
        lines.push(CSV_FORMAT.into());
        return lines.join("\n");
    }

    lines.push(format!("Q: {}", board.question));
    let status = match board.phase {
        Phase::Running => "running",
        _ => "stopped",
    };
    lines.push(format!(
        "Dobon remaining: {}   [{}]",
        board.penalty_remaining, status
    ));
    lines.extend(render_grid(board));

    match board.popup {
        Some(Verdict::Correct) => lines.push("*** CORRECT ***".into()),
        Some(Verdict::Penalty) => lines.push("*** DOBON! ***".into()),
        None => (),
    }

    lines.join("\n")
}

impl<W: Write> GameOutput for TerminalOutput<W> {
    fn say(&self, message: &Message) {
        self.write(&interpret_message(message));
    }

    fn render(&self, board: &Board) {
        self.write(&render_board(board));
    }
}
