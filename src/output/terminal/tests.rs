use super::*;
use crate::game::definition::QuizDefinition;
use crate::game::layout::GridDimensions;
use crate::game::session::Session;

fn board(source: &str, start: bool) -> Board {
    let mut session = Session::default();
    session.load(QuizDefinition::from_reader(source.as_bytes()).unwrap());
    if start {
        session.start();
    }
    let mut grid = GridDimensions::default();
    grid.fit(session.num_visible_options());
    Board::new(&session, grid, None)
}

#[test]
fn renders_empty_board_with_format_hint() {
    let board = Board::new(&Session::default(), GridDimensions::default(), None);
    let text = render_board(&board);
    assert!(text.contains("No quiz loaded"));
    assert!(text.contains(CSV_FORMAT));
}

#[test]
fn renders_question_counter_and_cells() {
    let text = render_board(&board("Which?\nA,0\nB,1\nC,2\n", true));
    assert!(text.contains("Q: Which?"));
    assert!(text.contains("Dobon remaining: 1"));
    assert!(text.contains("[running]"));
    assert!(text.contains("[ 1. A"));
    assert!(text.contains("[ 3. C"));
}

#[test]
fn disabled_cells_use_parentheses() {
    let text = render_board(&board("Which?\nA,0\n", false));
    assert!(text.contains("( 1. A"));
    assert!(text.contains("[stopped]"));
}

#[test]
fn pads_wide_text_to_equal_width() {
    let board = board("Q\nドボン,1\nA,0\nB,2\n", true);
    let lines = render_grid(&board);
    assert_eq!(lines.len(), 1);
    let cells: Vec<&str> = lines[0].split(" ]").collect();
    let widths: Vec<usize> = cells[..3]
        .iter()
        .map(|c| UnicodeWidthStr::width(c.trim_start()))
        .collect();
    assert!(widths.iter().all(|w| *w == widths[0]));
}

#[test]
fn shows_popup() {
    let mut board = board("Q\nA,0\n", true);
    board.popup = Some(Verdict::Penalty);
    assert!(render_board(&board).contains("DOBON!"));
    board.popup = Some(Verdict::Correct);
    assert!(render_board(&board).contains("CORRECT"));
}

#[test]
fn writes_messages_to_sink() {
    let output = TerminalOutput::new(Vec::new());
    output.say(&Message::ConfirmSelection("A".to_owned()));
    output.say(&Message::ConfirmClear);
    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.contains("Open \"A\"? (yes/no)"));
    assert!(text.contains("Go back to before the CSV import?"));
}
