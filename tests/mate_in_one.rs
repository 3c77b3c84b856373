use chess::BoardStatus;
use serde::Deserialize;

use chess_core::search::MATE_SCORE;
use chess_core::{search_with_outcome, GameBoard, Position, SearchConfig, SearchState, TurnTimer};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn uci_from_problem_moves(moves: &str) -> String {
    moves.replace('-', "")
}

fn mate_in_one_problems() -> Vec<Problem> {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid problems.json");
    set.problems
        .into_iter()
        .filter(|p| p.kind == "Mate in One")
        .collect()
}

#[test]
fn listed_solutions_are_mate() {
    let problems = mate_in_one_problems();
    assert!(!problems.is_empty());

    for problem in &problems {
        let mut board = GameBoard::from_fen(&problem.fen).expect("valid fen");
        board
            .play_line(&[uci_from_problem_moves(&problem.moves).as_str()])
            .expect("solution is legal");
        assert_eq!(
            board.status(),
            BoardStatus::Checkmate,
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn search_finds_every_mate_in_one() {
    for problem in mate_in_one_problems() {
        let mut board = GameBoard::from_fen(&problem.fen).expect("valid fen");
        let mut state = SearchState::new(SearchConfig::default().with_max_depth(4).with_cache_mb(1));

        let outcome = search_with_outcome(&mut board, &TurnTimer::unlimited(), &mut state)
            .expect("position has moves");
        assert_eq!(
            outcome.score,
            Some(MATE_SCORE - 1),
            "no mate score for fen: {}",
            problem.fen
        );

        board.make_move(outcome.best_move);
        assert_eq!(
            board.status(),
            BoardStatus::Checkmate,
            "{} is not mate in fen: {}",
            outcome.best_move,
            problem.fen
        );
    }
}
