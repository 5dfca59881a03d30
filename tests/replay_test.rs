//! Tests for the headless replay command.

use brutal_tictactoe::{GameStatus, Player, Position, run_moves, write_report};

fn render(moves: &[usize], json: bool) -> String {
    let report = run_moves(moves);
    let mut out = Vec::new();
    write_report(&mut out, &report, json).expect("write to memory");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_replay_win() {
    let report = run_moves(&[0, 1, 3, 2, 6]);
    assert_eq!(report.state.status(), GameStatus::Won(Player::X));
    assert_eq!(report.message, "🎉 Player X WINS! 🎉");
    assert!(report.ignored.is_empty());
}

#[test]
fn test_replay_tie() {
    let report = run_moves(&[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    assert_eq!(report.state.status(), GameStatus::Tied);
    assert_eq!(report.message, "🤝 IT'S A TIE! 🤝");
}

#[test]
fn test_replay_reports_ignored_moves() {
    // Repeat, off-board, and two moves after X completes the left column.
    let report = run_moves(&[0, 0, 1, 42, 2, 4, 6, 5, 3, 7, 8]);
    assert_eq!(report.state.status(), GameStatus::Won(Player::X));
    assert_eq!(report.ignored, vec![0, 42, 7, 8]);
    assert!(report.state.board().is_empty(Position::BottomRight));
}

#[test]
fn test_replay_empty_list() {
    let report = run_moves(&[]);
    assert_eq!(report.message, "Player X's Turn");
    assert_eq!(report.state.history().len(), 0);
}

#[test]
fn test_text_output() {
    let text = render(&[0, 4, 0], false);
    assert_eq!(
        text,
        "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n\nPlayer X's Turn\nIgnored moves: 0\n"
    );
}

#[test]
fn test_json_output() {
    let text = render(&[0, 1, 3, 2, 6], true);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["message"], "🎉 Player X WINS! 🎉");
    assert_eq!(value["state"]["status"]["Won"], "X");
    assert_eq!(value["ignored"].as_array().map(Vec::len), Some(0));
}
